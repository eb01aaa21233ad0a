// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::{SerializationError, TransportError};

/// Turns a document into the bytes sent over the wire, and back.
pub trait Serializer<D>: Send + Sync {
    fn encode(&self, document: &D) -> Result<Vec<u8>, SerializationError>;

    fn decode(&self, payload: &[u8]) -> Result<D, SerializationError>;
}

/// Performs the network exchange for one submission.
///
/// Implementors own every protocol detail (endpoint, method, headers) and
/// report the response status code as-is. Deciding whether that status is a
/// success is left to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, payload: Vec<u8>, signature: &str) -> Result<u16, TransportError>;
}
