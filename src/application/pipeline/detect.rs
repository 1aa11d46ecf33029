//! Arbitrage detection over best prices.
//!
//! A game is an arbitrage when the implied probabilities of its best prices
//! sum to strictly less than one. The sum is a game-level property, so a game
//! is kept or dropped as a whole.
//!
//! The sum is only meaningful if every outcome of the game survived
//! filtering. A game whose bookmakers quoted a subset of outcomes sums too
//! few terms and looks like an arbitrage; see `Pipeline::run` for how such
//! games are flagged.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::{ArbitrageRow, BestPriceRow, GameId, Price, Probability};

/// Implied probability of a decimal price (1 / price).
///
/// Returns `None` for prices that don't give a positive probability.
#[must_use]
pub fn implied_probability(price: Price) -> Option<Probability> {
    if price <= Price::ZERO {
        return None;
    }
    Decimal::ONE
        .checked_div(price)
        .filter(|probability| *probability > Probability::ZERO)
}

struct GameGroup {
    rows: Vec<(BestPriceRow, Probability)>,
    priced: bool,
}

/// Keep the rows of every game whose implied probabilities sum below one.
pub fn find_arbitrage(rows: Vec<BestPriceRow>) -> Vec<ArbitrageRow> {
    let mut index: HashMap<GameId, usize> = HashMap::new();
    let mut groups: Vec<GameGroup> = Vec::new();

    for row in rows {
        let slot = *index.entry(row.game_id().clone()).or_insert_with(|| {
            groups.push(GameGroup {
                rows: Vec::new(),
                priced: true,
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];

        match implied_probability(row.price()) {
            Some(probability) => group.rows.push((row, probability)),
            None => {
                warn!(
                    game_id = %row.game_id(),
                    outcome = row.outcome(),
                    price = %row.price(),
                    "Unusable price, dropping game"
                );
                group.priced = false;
            }
        }
    }

    let mut found = Vec::new();
    for group in groups.into_iter().filter(|g| g.priced && !g.rows.is_empty()) {
        let sum: Probability = group.rows.iter().map(|(_, p)| *p).sum();
        let outcome_count = group.rows.len();
        let game_id = group.rows[0].0.game_id().clone();

        if sum >= Probability::ONE {
            debug!(%game_id, %sum, "No arbitrage");
            continue;
        }

        debug!(%game_id, %sum, outcomes = outcome_count, "Arbitrage found");
        found.extend(
            group
                .rows
                .into_iter()
                .map(|(row, p)| ArbitrageRow::new(row, p, sum, outcome_count)),
        );
    }

    found
}
