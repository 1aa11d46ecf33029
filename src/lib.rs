//! Oddsarb - sports betting arbitrage finder.
//!
//! Takes one snapshot of bookmaker odds, finds the games where backing every
//! outcome at its best price guarantees a profit, and works out how to split
//! a stake across those outcomes.
//!
//! # Architecture
//!
//! - [`domain`] - Game records, pipeline rows, identifiers
//! - [`application`] - The pipeline: flatten, filter, select, detect, allocate
//! - [`port`] - Traits for odds sources and reporters
//! - [`adapter`] - The Odds API client, snapshot files, console report, CLI
//! - [`infrastructure`] - Configuration and logging
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use oddsarb::application::pipeline::Pipeline;
//! use oddsarb::domain::GameRecord;
//!
//! let games: Vec<GameRecord> = serde_json::from_str("[]").unwrap();
//! let rows = Pipeline::default().run(&games).unwrap();
//! assert!(rows.is_empty());
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
