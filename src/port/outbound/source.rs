//! Odds source port.
//!
//! A source returns one complete snapshot per call. There is no streaming,
//! retry, or caching behind this trait.

use async_trait::async_trait;

use crate::domain::GameRecord;
use crate::error::SourceError;

/// What to fetch: one sport, one region, one market type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OddsRequest {
    /// Sport key, e.g. `soccer_epl`.
    pub sport: String,
    /// Bookmaker region, e.g. `uk`.
    pub region: String,
    /// Market type, e.g. `h2h`.
    pub market: String,
}

/// Fetches an odds snapshot.
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// Fetch every game currently quoted for the request.
    async fn fetch(&self, request: &OddsRequest) -> Result<Vec<GameRecord>, SourceError>;

    /// Get the source name for logging/debugging.
    fn source_name(&self) -> &'static str;
}
