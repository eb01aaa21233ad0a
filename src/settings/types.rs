// Standard library
use std::path::PathBuf;

// 3rd party crates
use serde::Deserialize;

// Project imports
use crate::providers::crpt::constants::{DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT_SECS};

// Current module imports
use super::constants::{
    DEFAULT_COPIES, DEFAULT_LOG_LEVEL, DEFAULT_REQUEST_LIMIT, DEFAULT_TIME_UNITS,
};

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Unit the rate limit period is expressed in.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RateLimit {
    #[serde(default = "default_time_unit")]
    pub time_unit: TimeUnit,
    /// Number of `time_unit`s in one period
    #[serde(default = "default_time_units")]
    pub units: u64,
    /// Maximum requests admitted per period
    #[serde(default = "default_request_limit")]
    pub request_limit: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Api {
    #[serde(default = "default_api_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Submission {
    #[serde(default)]
    pub signature: String,
    pub document_path: Option<PathBuf>,
    #[serde(default = "default_copies")]
    pub copies: u32,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub rate_limit: RateLimit,
    #[serde(default)]
    pub api: Api,
    #[serde(default)]
    pub submission: Submission,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_time_unit() -> TimeUnit {
    TimeUnit::Seconds
}

fn default_time_units() -> u64 {
    DEFAULT_TIME_UNITS
}

fn default_request_limit() -> u32 {
    DEFAULT_REQUEST_LIMIT
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_copies() -> u32 {
    DEFAULT_COPIES
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            time_unit: default_time_unit(),
            units: default_time_units(),
            request_limit: default_request_limit(),
        }
    }
}

impl Default for Api {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Submission {
    fn default() -> Self {
        Self {
            signature: String::new(),
            document_path: None,
            copies: default_copies(),
        }
    }
}

/// Loads the application settings once at startup.
pub struct ConfigManager {
    pub settings: ValidatedSettings,
    pub config_path: PathBuf,
}

/// Settings that passed [`Settings::validate`].
#[derive(Debug, Clone)]
pub struct ValidatedSettings(pub(super) Settings);
