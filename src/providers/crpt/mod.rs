//! HTTP transport for the CRPT create-document endpoint.

pub mod constants;
pub mod functions;
pub mod impls;
pub mod types;

pub use types::HttpTransport;
