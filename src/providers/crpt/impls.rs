// Standard library
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::debug;

// Project imports
use crate::submission::{Transport, TransportError};

// Current module imports
use super::constants::SIGNATURE_HEADER;
use super::functions::{create_reqwest_client, signature_header_value};
use super::types::HttpTransport;

impl HttpTransport {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let url: Url = Url::parse(url).map_err(|_| TransportError::InvalidUrl(url.to_string()))?;
        let client = create_reqwest_client(timeout)?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, payload: Vec<u8>, signature: &str) -> Result<u16, TransportError> {
        let signature = signature_header_value(signature)?;

        debug!(
            url = %self.url,
            bytes = payload.len(),
            "Posting document"
        );

        let response = self
            .client
            .post(self.url.clone())
            .header(SIGNATURE_HEADER, signature)
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout
                } else if e.is_connect() {
                    TransportError::Connection(e.to_string())
                } else {
                    TransportError::Http(e)
                }
            })?;

        let status: StatusCode = response.status();
        debug!(status = status.as_u16(), "Received response");

        Ok(status.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::crpt::constants::{DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT_SECS};

    #[test]
    fn test_new_with_default_url() {
        let transport = HttpTransport::new(
            DEFAULT_API_URL,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
        .unwrap();

        assert_eq!(transport.url().host_str(), Some("ismp.crpt.ru"));
        assert_eq!(transport.url().path(), "/api/v3/lk/documents/create");
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = HttpTransport::new("not a url", Duration::from_secs(1));

        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }

    #[test]
    fn test_signature_header_is_sensitive() {
        let value = signature_header_value("c2lnbmF0dXJl").unwrap();

        assert!(value.is_sensitive());
        assert_eq!(value.to_str().unwrap(), "c2lnbmF0dXJl");
    }

    #[tokio::test]
    async fn test_send_rejects_invalid_signature_before_sending() {
        let transport =
            HttpTransport::new("http://127.0.0.1:9/create", Duration::from_secs(1)).unwrap();

        let result = transport.send(b"{}".to_vec(), "bad\nsignature").await;

        assert!(matches!(result, Err(TransportError::InvalidHeaderValue(_))));
    }
}
