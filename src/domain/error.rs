//! Domain errors raised by the pipeline stages.
//!
//! None of these abort a run on their own. The pipeline turns
//! [`DomainError::EmptyInput`] into an empty result, and stakes that are not
//! positive or are too large are rejected earlier by configuration validation.

use thiserror::Error;

/// Errors that occur when a pipeline stage cannot produce output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The best-price selector was handed no rows.
    #[error("no odds rows to select from")]
    EmptyInput,

    /// Stakes can only be allocated from a positive total.
    #[error("total stake must be positive, got {stake}")]
    NonPositiveStake {
        /// The invalid stake that was provided.
        stake: rust_decimal::Decimal,
    },

    /// The stake is too large to split without overflowing decimal arithmetic.
    #[error("total stake {stake} is too large to allocate")]
    StakeOverflow {
        /// The stake that overflowed.
        stake: rust_decimal::Decimal,
    },
}
