//! Odds source backed by a saved JSON snapshot.
//!
//! The file holds the same array the odds endpoint returns, which makes
//! runs reproducible without an API key.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use crate::domain::GameRecord;
use crate::error::SourceError;
use crate::port::{OddsRequest, OddsSource};

/// Reads game records from a local file.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl OddsSource for SnapshotFile {
    async fn fetch(&self, request: &OddsRequest) -> Result<Vec<GameRecord>, SourceError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::ReadSnapshot {
                path: self.path.display().to_string(),
                source,
            })?;
        let games: Vec<GameRecord> = serde_json::from_str(&body).map_err(SourceError::Malformed)?;

        info!(
            path = %self.path.display(),
            sport = %request.sport,
            games = games.len(),
            "Loaded odds snapshot"
        );
        Ok(games)
    }

    fn source_name(&self) -> &'static str {
        "snapshot"
    }
}
