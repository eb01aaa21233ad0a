// 3rd party crates
use thiserror::Error;

// Project imports
use crate::gate::GateError;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("Rate limit configuration error: {0}")]
    RateLimit(#[from] GateError),
    #[error("API URL must not be empty")]
    EmptyApiUrl,
    #[error("API timeout must be greater than 0, got {0}")]
    InvalidTimeout(u64),
    #[error("Submission signature must not be empty")]
    MissingSignature,
    #[error("Number of copies must be greater than 0, got {0}")]
    InvalidCopies(u32),
}
