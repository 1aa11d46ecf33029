//! The arbitrage pipeline.
//!
//! ```text
//! GameRecord[] -> flatten -> remove_excluded -> select_best_prices
//!              -> find_arbitrage -> allocate_stakes -> StakedRow[]
//! ```
//!
//! Every stage is a pure function over owned collections. [`Pipeline`]
//! chains them and turns an empty odds table into an empty result.

mod allocate;
mod detect;
mod filter;
mod flatten;
mod select;

use std::collections::{HashMap, HashSet};

use rust_decimal_macros::dec;
use tracing::{debug, info, warn};

use crate::domain::{BookmakerKey, DomainError, GameId, GameRecord, OddsRow, Stake, StakedRow};

pub use allocate::allocate_stakes;
pub use detect::{find_arbitrage, implied_probability};
pub use filter::{default_excluded, remove_excluded, EXCHANGE_BOOKMAKERS};
pub use flatten::flatten;
pub use select::select_best_prices;

/// Inputs the pipeline needs beyond the snapshot itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Bookmakers whose quotes are removed before price selection.
    pub excluded_bookmakers: HashSet<BookmakerKey>,
    /// Amount split across the outcomes of each arbitrage game.
    pub total_stake: Stake,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            excluded_bookmakers: default_excluded(),
            total_stake: dec!(1000),
        }
    }
}

/// Runs a snapshot through every stage.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Compute staked arbitrage rows for a snapshot.
    ///
    /// An empty snapshot, or one where every quote is filtered out, yields an
    /// empty result rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveStake`] if the configured stake is not
    /// positive, or [`DomainError::StakeOverflow`] if it is too large to split.
    pub fn run(&self, games: &[GameRecord]) -> Result<Vec<StakedRow>, DomainError> {
        let rows = flatten(games);
        let quoted = quoted_outcome_counts(&rows);
        let rows = remove_excluded(rows, &self.config.excluded_bookmakers);

        let best = match select_best_prices(rows) {
            Ok(best) => best,
            Err(DomainError::EmptyInput) => {
                debug!(games = games.len(), "No odds rows to evaluate");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let arbitrage = find_arbitrage(best);
        let mut staked = allocate_stakes(arbitrage, self.config.total_stake)?;
        flag_incomplete(&mut staked, &quoted);

        info!(
            games = games.len(),
            opportunities = group_by_game(&staked).len(),
            "Pipeline complete"
        );
        Ok(staked)
    }
}

/// Group rows by game, in the order each game first appears.
pub fn group_by_game(rows: &[StakedRow]) -> Vec<Vec<&StakedRow>> {
    let mut index: HashMap<&GameId, usize> = HashMap::new();
    let mut groups: Vec<Vec<&StakedRow>> = Vec::new();

    for row in rows {
        let slot = *index.entry(row.game_id()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(row);
    }

    groups
}

/// Distinct outcome names quoted per game, counted before any filtering.
fn quoted_outcome_counts(rows: &[OddsRow]) -> HashMap<GameId, usize> {
    let mut names: HashMap<&GameId, HashSet<&str>> = HashMap::new();
    for row in rows {
        names
            .entry(&row.game.id)
            .or_default()
            .insert(row.outcome.as_str());
    }

    names
        .into_iter()
        .map(|(id, outcomes)| (id.clone(), outcomes.len()))
        .collect()
}

/// Flag games that reached the detector with fewer outcomes than were quoted.
///
/// Their implied-probability sum is partial, so the arbitrage may be false.
/// They're kept and reported, not dropped.
fn flag_incomplete(rows: &mut [StakedRow], quoted: &HashMap<GameId, usize>) {
    let mut warned: HashSet<GameId> = HashSet::new();

    for row in rows.iter_mut() {
        let summed = row.arbitrage().outcome_count();
        let Some(&expected) = quoted.get(row.game_id()) else {
            continue;
        };
        if summed >= expected {
            continue;
        }

        if warned.insert(row.game_id().clone()) {
            warn!(
                game_id = %row.game_id(),
                fixture = %row.game().fixture(),
                summed,
                quoted = expected,
                "Incomplete outcome set, arbitrage may be false"
            );
        }
        row.mark_incomplete();
    }
}
