//! The Odds API (`api.the-odds-api.com`) integration.

pub mod client;
pub mod settings;

pub use client::OddsApiClient;
pub use settings::OddsApiConfig;
