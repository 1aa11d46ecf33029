//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration comes from defaults, an optional TOML file, and the
//! `ODDS_API_KEY` environment variable. CLI flags are applied on top by the
//! `scan` command, which re-validates afterwards.
//!
//! # Example
//!
//! ```no_run
//! use oddsarb::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

use super::logging::LoggingConfig;
use crate::adapter::outbound::odds_api::settings::OddsApiConfig;
use crate::application::pipeline::{PipelineConfig, EXCHANGE_BOOKMAKERS};
use crate::domain::BookmakerKey;
use crate::error::{ConfigError, Result};

/// Environment variable holding the odds provider API key.
pub const API_KEY_ENV: &str = "ODDS_API_KEY";

/// Largest accepted `[stake] total`.
pub const MAX_TOTAL_STAKE: Decimal = dec!(1000000000000);

/// Staking settings for the `[stake]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeConfig {
    /// Amount split across the outcomes of each arbitrage game.
    #[serde(default = "default_total_stake")]
    pub total: Decimal,
}

fn default_total_stake() -> Decimal {
    Decimal::ONE_THOUSAND
}

impl Default for StakeConfig {
    fn default() -> Self {
        Self {
            total: default_total_stake(),
        }
    }
}

/// Bookmaker exclusion for the `[filter]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Bookmaker keys whose quotes are ignored. Defaults to the betting exchanges.
    #[serde(default = "default_excluded_bookmakers")]
    pub excluded_bookmakers: Vec<String>,
}

fn default_excluded_bookmakers() -> Vec<String> {
    EXCHANGE_BOOKMAKERS.iter().map(|s| (*s).to_string()).collect()
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            excluded_bookmakers: default_excluded_bookmakers(),
        }
    }
}

/// Report rendering for the `[report]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Symbol printed before stakes and payouts.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "£".into()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub odds: OddsApiConfig,
    #[serde(default)]
    pub stake: StakeConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a value fails validation.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read, isn't valid TOML, or a
    /// value fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` if given, otherwise start from defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let mut config = Self::default();
                config.apply_env();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Read the API key from the environment (never from the config file).
    fn apply_env(&mut self) {
        self.odds.api_key = std::env::var(API_KEY_ENV)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
    }

    /// Validate configuration values.
    ///
    /// The API key isn't checked here since snapshot runs don't need one;
    /// see [`Config::api_key`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<()> {
        let odds = &self.odds;
        if odds.sport.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "sport" }.into());
        }
        if odds.region.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "region" }.into());
        }
        if odds.market.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "market" }.into());
        }
        if odds.market.contains(',') {
            return Err(ConfigError::InvalidValue {
                field: "market",
                reason: format!("expected a single market, got '{}'", odds.market),
            }
            .into());
        }

        let api_url = url::Url::parse(&odds.api_url).map_err(|e| ConfigError::InvalidValue {
            field: "api_url",
            reason: e.to_string(),
        })?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                reason: format!("unsupported scheme '{}'", api_url.scheme()),
            }
            .into());
        }

        if odds.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.stake.total <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "total_stake",
                reason: format!("must be positive, got {}", self.stake.total),
            }
            .into());
        }
        if self.stake.total > MAX_TOTAL_STAKE {
            return Err(ConfigError::InvalidValue {
                field: "total_stake",
                reason: format!("must be at most {MAX_TOTAL_STAKE}, got {}", self.stake.total),
            }
            .into());
        }

        if !is_level_filter(&self.logging.level) {
            return Err(ConfigError::InvalidValue {
                field: "level",
                reason: format!(
                    "expected trace, debug, info, warn, error or off, got '{}'",
                    self.logging.level
                ),
            }
            .into());
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected 'pretty' or 'json', got '{}'", self.logging.format),
            }
            .into());
        }

        Ok(())
    }

    /// The API key for the odds provider.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when no key was provided.
    pub fn api_key(&self) -> Result<&str> {
        self.odds
            .api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingField { field: "api_key" }.into())
    }

    /// Pipeline inputs derived from this configuration.
    #[must_use]
    pub fn pipeline_config(&self) -> PipelineConfig {
        let excluded_bookmakers: HashSet<BookmakerKey> = self
            .filter
            .excluded_bookmakers
            .iter()
            .map(|key| BookmakerKey::new(key.trim()))
            .collect();

        PipelineConfig {
            excluded_bookmakers,
            total_stake: self.stake.total,
        }
    }

    /// Initialize the tracing subscriber from the logging section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

/// A bare level (`info`) or comma-separated `target=level` directives.
fn is_level_filter(level: &str) -> bool {
    level.split(',').all(|directive| {
        let level = directive
            .rsplit_once('=')
            .map_or(directive, |(_, level)| level)
            .trim();
        !level.is_empty() && level.parse::<LevelFilter>().is_ok()
    })
}
