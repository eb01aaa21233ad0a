/// Create-document endpoint used when none is configured
pub const DEFAULT_API_URL: &str = "https://ismp.crpt.ru/api/v3/lk/documents/create";

/// Header carrying the document signature
pub const SIGNATURE_HEADER: &str = "Signature";

/// HTTP client settings
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
