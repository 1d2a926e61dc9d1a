//! Serialization of the document to and from disk.

use crate::server::Document;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Indentation used for the output file
const JSON_INDENT: &[u8] = b"    ";

/// Errors that can occur while writing or reading the document
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Output directory does not exist: {path}")]
    MissingDirectory { path: PathBuf },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode JSON for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Render the document as JSON with a four-space indent
pub fn to_pretty_json(document: &Document) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut ser)?;
    Ok(buf)
}

/// Write the document to `path`, replacing any existing file.
///
/// The parent directory must already exist. The write is not atomic: a
/// failure midway can leave a truncated file behind.
pub fn write_document(document: &Document, path: &Path) -> Result<(), WriteError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(WriteError::MissingDirectory {
                path: parent.to_path_buf(),
            });
        }
    }

    let json = to_pretty_json(document).map_err(|source| WriteError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let io_err = |source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&json).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    log::info!("Wrote {} bytes to {:?}", json.len(), path);
    Ok(())
}

/// Load a previously written document
pub fn read_document(path: &Path) -> Result<Document, WriteError> {
    let file = File::open(path).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(std::io::BufReader::new(file)).map_err(|source| WriteError::Json {
        path: path.to_path_buf(),
        source,
    })
}
