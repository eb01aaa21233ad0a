pub mod crpt;
pub mod json;

pub use crpt::HttpTransport;
pub use json::JsonSerializer;
