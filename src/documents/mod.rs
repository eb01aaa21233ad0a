//! Product documents submitted to the create-document endpoint.

pub mod errors;
pub mod impls;
pub mod types;

pub use errors::DocumentError;
pub use types::{Description, Product, ProductDocument};
