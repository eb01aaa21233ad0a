// Standard library
use std::path::PathBuf;

// 3rd party crates
use thiserror::Error;

// Project imports
use crate::submission::SerializationError;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read document file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode document: {0}")]
    Decode(#[from] SerializationError),
}
