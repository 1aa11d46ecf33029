//! Exchange quote removal.
//!
//! Betting exchanges quote peer-to-peer back prices that aren't fixed odds,
//! so mixing them with bookmaker prices produces arbitrage that can't be
//! taken.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{BookmakerKey, OddsRow};

/// Bookmaker keys of the exchanges excluded by default.
pub const EXCHANGE_BOOKMAKERS: [&str; 4] = ["betfair_ex_uk", "betfair_ex_eu", "betfair_ex_au", "matchbook"];

/// The default exclusion set built from [`EXCHANGE_BOOKMAKERS`].
#[must_use]
pub fn default_excluded() -> HashSet<BookmakerKey> {
    EXCHANGE_BOOKMAKERS.into_iter().map(BookmakerKey::from).collect()
}

/// Drop every row quoted by an excluded bookmaker. Order is preserved.
///
/// Rows without a bookmaker key can't match the set and are kept.
pub fn remove_excluded(mut rows: Vec<OddsRow>, excluded: &HashSet<BookmakerKey>) -> Vec<OddsRow> {
    let before = rows.len();
    rows.retain(|row| {
        row.bookmaker_key
            .as_ref()
            .map_or(true, |key| !excluded.contains(key))
    });

    debug!(
        removed = before - rows.len(),
        kept = rows.len(),
        "Removed excluded bookmakers"
    );
    rows
}
