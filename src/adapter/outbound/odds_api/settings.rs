//! Odds provider configuration.

use serde::{Deserialize, Serialize};

use crate::port::OddsRequest;

/// Settings for the `[odds]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddsApiConfig {
    /// Base URL of the v4 API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Sport key, e.g. `soccer_epl`.
    #[serde(default = "default_sport")]
    pub sport: String,
    /// Bookmaker region, e.g. `uk`, `eu`, `us`.
    #[serde(default = "default_region")]
    pub region: String,
    /// Market type. Only two/three-way markets such as `h2h` make sense.
    #[serde(default = "default_market")]
    pub market: String,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Loaded from `ODDS_API_KEY` or `--api-key`, never from the config file.
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_api_url() -> String {
    "https://api.the-odds-api.com/v4".into()
}

fn default_sport() -> String {
    "soccer_epl".into()
}

fn default_region() -> String {
    "uk".into()
}

fn default_market() -> String {
    "h2h".into()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for OddsApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            sport: default_sport(),
            region: default_region(),
            market: default_market(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}

impl OddsApiConfig {
    /// The request these settings describe.
    #[must_use]
    pub fn request(&self) -> OddsRequest {
        OddsRequest {
            sport: self.sport.clone(),
            region: self.region.clone(),
            market: self.market.clone(),
        }
    }
}
