//! Consistency checks for a generated server document.
//!
//! Used by `--check` to verify an existing file and by the generator to
//! report duplicate addresses.

use crate::ip::is_valid_ipv6;
use crate::server::{
    server_label, Document, ObjectProperty, PropertyRef, Relation, ServerRecord, CLOUD_LABEL,
};
use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Too many edge servers: {edge_server_num}")]
    TooManyServers { edge_server_num: usize },

    #[error("Expected {expected} {what}, found {actual}")]
    CountMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Server at position {index} is labelled '{found}', expected '{expected}'")]
    UnexpectedLabel {
        index: usize,
        expected: String,
        found: String,
    },

    #[error("Invalid IPv6 address '{address}' for server {label}")]
    InvalidAddress { label: String, address: String },

    #[error("Address of server {label} ('{record}') does not match ipv6[{index}] ('{listed}')")]
    AddressMismatch {
        label: String,
        index: usize,
        record: String,
        listed: String,
    },

    #[error("Invalid relationships on server {label}: {reason}")]
    InvalidRelationships { label: String, reason: String },
}

/// Validate the document shape for a fleet of `edge_server_num` edge servers
///
/// # Examples
/// ```
/// use mecm2m_setup::server::build_document;
/// use mecm2m_setup::utils::validation::validate_document;
///
/// let doc = build_document(1, vec!["::1".into(), "::2".into()]).unwrap();
/// assert!(validate_document(&doc, 1).is_ok());
/// ```
pub fn validate_document(
    document: &Document,
    edge_server_num: usize,
) -> Result<(), ValidationError> {
    let expected = edge_server_num
        .checked_add(1)
        .ok_or(ValidationError::TooManyServers { edge_server_num })?;
    let servers = &document.servers;

    if servers.ipv6.len() != expected {
        return Err(ValidationError::CountMismatch {
            what: "IPv6 addresses",
            expected,
            actual: servers.ipv6.len(),
        });
    }
    if servers.server.len() != expected {
        return Err(ValidationError::CountMismatch {
            what: "server records",
            expected,
            actual: servers.server.len(),
        });
    }

    for (index, record) in servers.server.iter().enumerate() {
        let label = server_label(index);
        if record.label() != label {
            return Err(ValidationError::UnexpectedLabel {
                index,
                expected: label,
                found: record.label().to_string(),
            });
        }

        let address = &record.data_property.ipv6_address;
        if !is_valid_ipv6(address) {
            return Err(ValidationError::InvalidAddress {
                label,
                address: address.clone(),
            });
        }
        if *address != servers.ipv6[index] {
            return Err(ValidationError::AddressMismatch {
                label,
                index,
                record: address.clone(),
                listed: servers.ipv6[index].clone(),
            });
        }

        validate_relationships(record)?;
    }

    Ok(())
}

fn validate_relationships(record: &ServerRecord) -> Result<(), ValidationError> {
    let label = record.label();
    let edges = &record.object_property;
    let invalid = |reason: String| ValidationError::InvalidRelationships {
        label: label.to_string(),
        reason,
    };

    if record.is_cloud() {
        if !edges.is_empty() {
            return Err(invalid(format!("cloud server has {} edges, expected none", edges.len())));
        }
        return Ok(());
    }

    if edges.len() != 2 {
        return Err(invalid(format!("expected 2 edges, found {}", edges.len())));
    }

    let lower = edges
        .iter()
        .filter(|e| links(e, Relation::IsLowerOf, label, CLOUD_LABEL));
    let upper = edges
        .iter()
        .filter(|e| links(e, Relation::IsUpperOf, CLOUD_LABEL, label));
    if lower.count() != 1 || upper.count() != 1 {
        return Err(invalid(format!(
            "expected one {} edge to {} and one {} edge from {}",
            Relation::IsLowerOf,
            CLOUD_LABEL,
            Relation::IsUpperOf,
            CLOUD_LABEL
        )));
    }

    Ok(())
}

/// Both endpoints must be full `Server`/`Label` references
fn links(edge: &ObjectProperty, relation: Relation, from: &str, to: &str) -> bool {
    edge.relation == relation
        && edge.from == PropertyRef::server(from)
        && edge.to == PropertyRef::server(to)
}

/// Addresses listed more than once, in ascending order
pub fn duplicate_addresses(document: &Document) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for addr in &document.servers.ipv6 {
        *counts.entry(addr.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(addr, _)| addr.to_string())
        .collect()
}
