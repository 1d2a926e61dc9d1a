//! Shared utilities: document validation.

pub mod validation;

pub use validation::{duplicate_addresses, validate_document, ValidationError};
