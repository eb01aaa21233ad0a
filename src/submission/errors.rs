// 3rd party crates
use thiserror::Error;

// Project imports
use crate::gate::GateError;

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid API URL '{0}'")]
    InvalidUrl(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connection(String),
}

/// Every way a single submission can fail.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] SerializationError),

    #[error("Admission failed: {0}")]
    Gate(#[from] GateError),

    #[error("Transport failed: {0}")]
    Transport(#[from] TransportError),

    #[error("Document rejected with HTTP status {status}")]
    Rejected { status: u16 },

    #[error("Submission cancelled")]
    Cancelled,
}
