//! # mecm2m-setup - Main server configuration generator
//!
//! This library generates `config_main_server.json`, the static description
//! of the server fleet used by the MEC M2M simulator: one cloud server and a
//! number of edge servers, each with a randomly assigned IPv6 address.
//!
//! ## Overview
//!
//! The cloud server is always labelled `S0`. Edge servers are labelled
//! `S1`..`SN` and each one is linked to the cloud server by two directed
//! relationships:
//!
//! - `isLowerOf`: edge server -> cloud server
//! - `isUpperOf`: cloud server -> edge server
//!
//! There are no edge-to-edge relationships.
//!
//! ## Architecture
//!
//! - `config`: settings resolved from the environment (`PROJECT_PATH`, `.env`)
//! - `ip`: random IPv6 address generation
//! - `server`: document types and the record builder
//! - `writer`: JSON serialization to and from disk
//! - `utils`: document validation
//! - `orchestrator`: a complete generator run
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mecm2m_setup::config::{Overrides, Settings};
//! use mecm2m_setup::orchestrator;
//!
//! let settings = Settings::from_env(Overrides::default())?;
//! let document = orchestrator::generate_server_config(&settings)?;
//! assert_eq!(document.servers.server.len(), settings.server_count());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Output Location
//!
//! ```text
//! $PROJECT_PATH/Main/config/json_files/config_main_server.json
//! ```
//!
//! The directory must already exist; it is not created.
//!
//! ## Error Handling
//!
//! Each module reports failures through its own `thiserror` enum. The
//! orchestrator and the binary use `color_eyre` to attach context.

pub mod config;
pub mod ip;
pub mod orchestrator;
pub mod server;
pub mod utils;
pub mod writer;
