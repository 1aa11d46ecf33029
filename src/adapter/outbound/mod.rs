//! Outbound adapters (driven side).

pub mod console;
pub mod odds_api;
pub mod snapshot;
