// Standard library
use std::time::Duration;

// 3rd party crates
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::error;

// Project imports
use crate::submission::TransportError;

/// Creates a reqwest client that sends JSON bodies with the given timeout.
pub(super) fn create_reqwest_client(timeout: Duration) -> Result<Client, TransportError> {
    // Create headers.
    let mut headers: HeaderMap = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    // Build the client.
    let client: Client = Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            TransportError::Http(e)
        })?;

    Ok(client)
}

/// Builds the signature header value, hidden from debug output.
pub(super) fn signature_header_value(signature: &str) -> Result<HeaderValue, TransportError> {
    let mut value: HeaderValue = HeaderValue::from_str(signature).map_err(|e| {
        error!("Invalid signature format: {}", e);
        TransportError::InvalidHeaderValue(e)
    })?;
    value.set_sensitive(true);

    Ok(value)
}
