//! Odds snapshot records as delivered by the odds provider.
//!
//! The provider omits fields freely, so every scalar is optional and every
//! nested list defaults to empty. A missing list flattens to zero rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::ids::{BookmakerKey, GameId};
use super::money::Price;

/// One sporting event with all bookmaker quotes for it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: Option<GameId>,
    pub sport_key: Option<String>,
    pub sport_title: Option<String>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub commence_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bookmakers: Vec<BookmakerQuote>,
}

/// Quotes from one bookmaker for a game.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookmakerQuote {
    pub key: Option<BookmakerKey>,
    pub title: Option<String>,
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub markets: Vec<MarketQuote>,
}

/// One market (e.g. `h2h`) offered by a bookmaker.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarketQuote {
    pub key: Option<String>,
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub outcomes: Vec<OutcomeQuote>,
}

/// A single priced outcome.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutcomeQuote {
    pub name: Option<String>,
    pub price: Option<Price>,
}

impl GameRecord {
    /// Human-readable fixture label, e.g. `Arsenal vs Chelsea`.
    #[must_use]
    pub fn fixture(&self) -> String {
        fixture_label(self.home_team.as_deref(), self.away_team.as_deref())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn fixture_label(home: Option<&str>, away: Option<&str>) -> String {
    format!("{} vs {}", home.unwrap_or("?"), away.unwrap_or("?"))
}
