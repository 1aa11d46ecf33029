use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures fetching an odds snapshot.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("odds request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("odds provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to read snapshot {path}: {source}")]
    ReadSnapshot {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed odds response: {0}")]
    Malformed(#[source] serde_json::Error),
}

impl SourceError {
    /// True when the source couldn't be reached or refused the request,
    /// as opposed to answering with something unparseable.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        !matches!(self, Self::Malformed(_))
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
