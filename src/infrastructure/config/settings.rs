//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; every section is optional and
//! falls back to defaults. The odds feed API key is read from `ODDS_API_KEY`
//! and never from the file.
//!
//! # Example
//!
//! ```no_run
//! use propedge::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("propedge.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::scan::{ScanConfig, MAX_THRESHOLD};
use crate::adapter::outbound::odds_api::OddsApiConfig;
use crate::adapter::outbound::reference::ReferenceConfig;
use crate::domain::vocabulary::compact;
use crate::domain::MarketVocabulary;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// EV threshold and competing books.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Provider market names mapped to the canonical market set.
    #[serde(default)]
    pub markets: MarketVocabulary,

    /// Market odds feed endpoint and HTTP settings.
    #[serde(default)]
    pub odds_api: OddsApiConfig,

    /// Reference book snapshot location.
    #[serde(default)]
    pub reference: ReferenceConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// Called by [`Self::parse_toml`]; call it again after applying
    /// command-line overrides.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.scan.threshold < Decimal::ZERO || self.scan.threshold > MAX_THRESHOLD {
            return Err(ConfigError::InvalidValue {
                field: "threshold",
                reason: format!("must be between 0 and {MAX_THRESHOLD}"),
            }
            .into());
        }
        if self.scan.supported_books.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "supported_books",
                reason: "must name at least one book".to_string(),
            }
            .into());
        }
        if self
            .scan
            .supported_books
            .iter()
            .any(|book| book.as_str().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "supported_books",
                reason: "book keys must not be empty".to_string(),
            }
            .into());
        }

        if self.markets.market_keys.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "market_keys",
                reason: "must map at least one feed key".to_string(),
            }
            .into());
        }
        if let Some(name) = self
            .markets
            .reference_names
            .keys()
            .find(|name| compact(name) != **name || name.is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "reference_names",
                reason: format!("'{name}' must be lowercase letters only"),
            }
            .into());
        }

        if self.odds_api.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        if url::Url::parse(&self.odds_api.base_url).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }
        if self.odds_api.sport.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "sport" }.into());
        }
        if self.odds_api.regions.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "regions" }.into());
        }
        if self.odds_api.http.timeout_ms == 0 || self.odds_api.http.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "timeouts must be greater than 0".to_string(),
            }
            .into());
        }

        if !self.logging.is_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: "must be 'pretty' or 'json'".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
