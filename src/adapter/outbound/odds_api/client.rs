//! The Odds API REST client.
//!
//! One GET per run against `{api_url}/sports/{sport}/odds/`. A transport
//! error, a non-2xx status, or an unparseable body fails the fetch; nothing
//! is retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, info, warn};

use super::settings::OddsApiConfig;
use crate::domain::GameRecord;
use crate::error::SourceError;
use crate::port::{OddsRequest, OddsSource};

/// Longest slice of an error body kept in [`SourceError::Status`].
const ERROR_BODY_LIMIT: usize = 220;

/// HTTP client for the odds endpoint.
pub struct OddsApiClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl OddsApiClient {
    /// Create a client from the `[odds]` settings.
    #[must_use]
    pub fn from_config(config: &OddsApiConfig, api_key: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.api_url.clone(),
            api_key: api_key.into(),
        }
    }

    fn odds_url(&self, sport: &str) -> String {
        format!("{}/sports/{}/odds/", self.base_url.trim_end_matches('/'), sport)
    }
}

#[async_trait]
impl OddsSource for OddsApiClient {
    async fn fetch(&self, request: &OddsRequest) -> Result<Vec<GameRecord>, SourceError> {
        let url = self.odds_url(&request.sport);
        info!(
            url = %url,
            region = %request.region,
            market = %request.market,
            "Fetching odds"
        );

        let response = self
            .http
            .get(&url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("regions", request.region.as_str()),
                ("markets", request.market.as_str()),
                ("oddsFormat", "decimal"),
                ("dateFormat", "iso"),
            ])
            .send()
            .await
            .map_err(SourceError::Request)?;

        let status = response.status();
        if let Some(remaining) = response
            .headers()
            .get("x-requests-remaining")
            .and_then(|v| v.to_str().ok())
        {
            debug!(remaining, "API quota");
        }

        let body = response.text().await.map_err(SourceError::Request)?;
        let games = decode_response(status.as_u16(), &body)?;

        debug!(games = games.len(), "Fetched odds");
        Ok(games)
    }

    fn source_name(&self) -> &'static str {
        "the-odds-api"
    }
}

/// Turn a status code and body into game records.
pub(crate) fn decode_response(status: u16, body: &str) -> Result<Vec<GameRecord>, SourceError> {
    if !(200..300).contains(&status) {
        return Err(SourceError::Status {
            status,
            body: error_snippet(body),
        });
    }
    serde_json::from_str(body).map_err(SourceError::Malformed)
}

fn error_snippet(body: &str) -> String {
    body.trim()
        .replace(['\n', '\r'], " ")
        .chars()
        .take(ERROR_BODY_LIMIT)
        .collect()
}
