//! Best price per (game, outcome).

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use crate::domain::{BestPriceRow, DomainError, GameId, OddsRow};

/// Reduce the odds table to the highest-priced row for each (game, outcome).
///
/// A later row only replaces the current best when its price is strictly
/// higher, so ties go to the first row seen. Output follows the order in
/// which each (game, outcome) first appears.
///
/// # Errors
///
/// Returns [`DomainError::EmptyInput`] when `rows` is empty.
pub fn select_best_prices(rows: Vec<OddsRow>) -> Result<Vec<BestPriceRow>, DomainError> {
    if rows.is_empty() {
        return Err(DomainError::EmptyInput);
    }

    let input = rows.len();
    let mut index: HashMap<(GameId, String), usize> = HashMap::new();
    let mut best: Vec<OddsRow> = Vec::new();

    for row in rows {
        match index.entry((row.game.id.clone(), row.outcome.clone())) {
            Entry::Occupied(slot) => {
                let current = &mut best[*slot.get()];
                if row.price > current.price {
                    *current = row;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(best.len());
                best.push(row);
            }
        }
    }

    debug!(rows = input, groups = best.len(), "Selected best prices");
    Ok(best.into_iter().map(BestPriceRow::new).collect())
}
