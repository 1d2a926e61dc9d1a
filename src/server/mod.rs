//! Server records for the main server configuration.
//!
//! - `types`: serializable document structure
//! - `builder`: construction of records and cloud/edge relationships

pub mod builder;
pub mod types;

pub use builder::{build_document, build_server, server_label, BuildError};
pub use types::{
    DataProperty, Document, ObjectProperty, PropertyRef, Relation, ServerRecord, Servers,
    CLOUD_LABEL,
};
