//! Builders for provider-shaped game records.

use rust_decimal::Decimal;

use oddsarb::domain::{BookmakerKey, BookmakerQuote, GameId, GameRecord, MarketQuote, OutcomeQuote};

pub fn outcome(name: &str, price: Decimal) -> OutcomeQuote {
    OutcomeQuote {
        name: Some(name.to_string()),
        price: Some(price),
    }
}

/// A bookmaker quoting one `h2h` market.
pub fn bookmaker(key: &str, prices: &[(&str, Decimal)]) -> BookmakerQuote {
    BookmakerQuote {
        key: Some(BookmakerKey::from(key)),
        title: Some(key.to_string()),
        last_update: None,
        markets: vec![MarketQuote {
            key: Some("h2h".to_string()),
            last_update: None,
            outcomes: prices
                .iter()
                .map(|(name, price)| outcome(name, *price))
                .collect(),
        }],
    }
}

pub fn game(id: &str, home: &str, away: &str, bookmakers: Vec<BookmakerQuote>) -> GameRecord {
    GameRecord {
        id: Some(GameId::from(id)),
        sport_key: Some("soccer_epl".to_string()),
        sport_title: Some("EPL".to_string()),
        home_team: Some(home.to_string()),
        away_team: Some(away.to_string()),
        commence_time: None,
        bookmakers,
    }
}
