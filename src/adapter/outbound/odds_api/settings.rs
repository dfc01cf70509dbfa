//! The Odds API configuration.

use serde::{Deserialize, Serialize};

/// Environment variable holding the API key. Never read from the config file.
pub const API_KEY_ENV: &str = "ODDS_API_KEY";

/// `[odds_api]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OddsApiConfig {
    /// API root, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sport key, e.g. `baseball_mlb`.
    #[serde(default = "default_sport")]
    pub sport: String,
    /// Comma-separated bookmaker regions.
    #[serde(default = "default_regions")]
    pub regions: String,
    #[serde(default)]
    pub http: OddsApiHttpConfig,
}

fn default_base_url() -> String {
    "https://api.the-odds-api.com/v4".into()
}

fn default_sport() -> String {
    "baseball_mlb".into()
}

fn default_regions() -> String {
    "us".into()
}

impl Default for OddsApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            sport: default_sport(),
            regions: default_regions(),
            http: OddsApiHttpConfig::default(),
        }
    }
}

/// HTTP client settings for the odds feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OddsApiHttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Maximum number of attempts for transient failures.
    #[serde(default = "default_http_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Backoff between retries in milliseconds.
    #[serde(default = "default_http_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    10_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    3000
}

const fn default_http_retry_max_attempts() -> u32 {
    3
}

const fn default_http_retry_backoff_ms() -> u64 {
    500
}

impl Default for OddsApiHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
            retry_max_attempts: default_http_retry_max_attempts(),
            retry_backoff_ms: default_http_retry_backoff_ms(),
        }
    }
}
