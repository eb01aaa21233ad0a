// 3rd party crates
use reqwest::{Client, Url};

/// Posts serialized documents to the create-document endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    pub(super) client: Client,
    pub(super) url: Url,
}
