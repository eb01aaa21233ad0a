/// Example configuration
pub const DEFAULT_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "info"

# Client-side rate limit for document submissions.
# At most `request_limit` requests are admitted per `units` x `time_unit`.
[rate_limit]
# One of "milliseconds", "seconds", "minutes", "hours", "days"
time_unit = "seconds"
units = 1
request_limit = 10

# Document API configuration
[api]
url = "https://ismp.crpt.ru/api/v3/lk/documents/create"
timeout_secs = 30

# What to submit
[submission]
signature = "your_signature_here"
# Optional: JSON document to submit, an empty document is sent otherwise
# document_path = "/path/to/document.json"
copies = 1
"#;

/// Prefix for environment overrides, e.g. `CRPT__RATE_LIMIT__REQUEST_LIMIT=5`
pub const ENV_PREFIX: &str = "CRPT";

/// Environment variable pointing at the configuration file
pub const CONFIG_PATH_ENV: &str = "CRPT_CONFIG_PATH";

/// Default settings
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_REQUEST_LIMIT: u32 = 10;
pub const DEFAULT_TIME_UNITS: u64 = 1;
pub const DEFAULT_COPIES: u32 = 1;
