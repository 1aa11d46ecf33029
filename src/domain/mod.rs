//! Odds snapshot types and the rows derived from them.

pub mod error;
mod game;
mod ids;
mod money;
mod row;

pub use error::DomainError;
pub use game::{BookmakerQuote, GameRecord, MarketQuote, OutcomeQuote};
pub use ids::{BookmakerKey, GameId};
pub use money::{Price, Probability, Stake};
pub use row::{ArbitrageRow, BestPriceRow, GameInfo, OddsRow, StakedRow};
