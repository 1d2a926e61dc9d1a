//! Generation orchestrator.
//!
//! Coordinates a generator run: address generation, document assembly and
//! writing, plus verification of an existing output file.

use crate::config::Settings;
use crate::ip::generate_addresses;
use crate::server::{build_document, BuildError, Document};
use crate::utils::validation::{duplicate_addresses, validate_document};
use crate::writer::{read_document, write_document};
use color_eyre::eyre::{Result, WrapErr};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build a document with addresses drawn from `rng`
pub fn generate_document<R: Rng + ?Sized>(
    edge_server_num: usize,
    rng: &mut R,
) -> Result<Document> {
    let server_count = edge_server_num
        .checked_add(1)
        .ok_or(BuildError::TooManyServers { edge_server_num })?;
    let addresses = generate_addresses(server_count, rng);
    let document = build_document(edge_server_num, addresses)?;

    // Collisions are astronomically unlikely and are reported, not fixed.
    for addr in duplicate_addresses(&document) {
        log::warn!("IPv6 address {} was assigned to more than one server", addr);
    }

    Ok(document)
}

/// Generate the document described by `settings` and write it to disk
pub fn generate_server_config(settings: &Settings) -> Result<Document> {
    let output_path = settings.output_path();
    log::info!(
        "Generating {} servers (1 cloud, {} edge)",
        settings.server_count(),
        settings.edge_server_num
    );

    let document = match settings.seed {
        Some(seed) => {
            log::info!("Using seeded address generation (seed {})", seed);
            generate_document(settings.edge_server_num, &mut StdRng::seed_from_u64(seed))?
        }
        None => generate_document(settings.edge_server_num, &mut rand::thread_rng())?,
    };

    write_document(&document, &output_path).wrap_err_with(|| {
        format!("Failed to write server configuration '{}'", output_path.display())
    })?;

    Ok(document)
}

/// Read the existing output file and validate it against `settings`
pub fn check_server_config(settings: &Settings) -> Result<Document> {
    let path = settings.output_path();
    log::info!("Checking server configuration {:?}", path);

    let document = read_document(&path)
        .wrap_err_with(|| format!("Failed to read server configuration '{}'", path.display()))?;
    validate_document(&document, settings.edge_server_num)
        .wrap_err_with(|| format!("Server configuration '{}' is invalid", path.display()))?;

    for addr in duplicate_addresses(&document) {
        log::warn!("IPv6 address {} is shared by more than one server", addr);
    }

    Ok(document)
}
