//! Tabular rows produced by the pipeline stages.
//!
//! Each stage wraps the row of the stage before it, so a field only exists
//! once the stage that computes it has run:
//!
//! ```text
//! OddsRow -> BestPriceRow -> ArbitrageRow -> StakedRow
//! ```

use chrono::{DateTime, Utc};

use super::game::fixture_label;
use super::ids::{BookmakerKey, GameId};
use super::money::{Price, Probability, Stake};

/// Game metadata carried on every row.
#[derive(Debug, Clone, PartialEq)]
pub struct GameInfo {
    pub id: GameId,
    pub sport_key: Option<String>,
    pub sport_title: Option<String>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub commence_time: Option<DateTime<Utc>>,
}

impl GameInfo {
    /// Human-readable fixture label, e.g. `Arsenal vs Chelsea`.
    #[must_use]
    pub fn fixture(&self) -> String {
        fixture_label(self.home_team.as_deref(), self.away_team.as_deref())
    }
}

/// One flattened outcome quote: a single (game, bookmaker, market, outcome) price.
#[derive(Debug, Clone, PartialEq)]
pub struct OddsRow {
    pub game: GameInfo,
    pub bookmaker_key: Option<BookmakerKey>,
    pub bookmaker_title: Option<String>,
    pub bookmaker_last_update: Option<DateTime<Utc>>,
    pub market_key: Option<String>,
    pub market_last_update: Option<DateTime<Utc>>,
    pub outcome: String,
    pub price: Price,
}

impl OddsRow {
    /// Bookmaker title, falling back to the key when the title is absent.
    #[must_use]
    pub fn bookmaker_label(&self) -> &str {
        self.bookmaker_title
            .as_deref()
            .or_else(|| self.bookmaker_key.as_ref().map(BookmakerKey::as_str))
            .unwrap_or("unknown")
    }
}

/// The best available price for one outcome of one game.
#[derive(Debug, Clone, PartialEq)]
pub struct BestPriceRow {
    odds: OddsRow,
}

impl BestPriceRow {
    pub(crate) fn new(odds: OddsRow) -> Self {
        Self { odds }
    }

    /// The winning odds row.
    pub fn odds(&self) -> &OddsRow {
        &self.odds
    }

    pub fn game_id(&self) -> &GameId {
        &self.odds.game.id
    }

    pub fn outcome(&self) -> &str {
        &self.odds.outcome
    }

    pub fn price(&self) -> Price {
        self.odds.price
    }
}

/// A best price that belongs to a game whose implied probabilities sum below one.
#[derive(Debug, Clone, PartialEq)]
pub struct ArbitrageRow {
    best: BestPriceRow,
    implied_probability: Probability,
    sum_implied_probability: Probability,
    outcome_count: usize,
}

impl ArbitrageRow {
    pub(crate) fn new(
        best: BestPriceRow,
        implied_probability: Probability,
        sum_implied_probability: Probability,
        outcome_count: usize,
    ) -> Self {
        Self {
            best,
            implied_probability,
            sum_implied_probability,
            outcome_count,
        }
    }

    pub fn odds(&self) -> &OddsRow {
        self.best.odds()
    }

    pub fn game_id(&self) -> &GameId {
        self.best.game_id()
    }

    pub fn price(&self) -> Price {
        self.best.price()
    }

    /// 1 / price.
    pub fn implied_probability(&self) -> Probability {
        self.implied_probability
    }

    /// Sum of implied probabilities over every outcome of the game.
    pub fn sum_implied_probability(&self) -> Probability {
        self.sum_implied_probability
    }

    /// Number of outcomes that went into the game's sum.
    pub fn outcome_count(&self) -> usize {
        self.outcome_count
    }
}

/// An arbitrage row with its share of the total stake.
#[derive(Debug, Clone, PartialEq)]
pub struct StakedRow {
    arbitrage: ArbitrageRow,
    stake: Stake,
    payout: Stake,
    roi: Probability,
    complete: bool,
}

impl StakedRow {
    pub(crate) fn new(
        arbitrage: ArbitrageRow,
        stake: Stake,
        payout: Stake,
        roi: Probability,
    ) -> Self {
        Self {
            arbitrage,
            stake,
            payout,
            roi,
            complete: true,
        }
    }

    /// Flag the row as belonging to a game whose outcome set looks partial.
    pub(crate) fn mark_incomplete(&mut self) {
        self.complete = false;
    }

    pub fn arbitrage(&self) -> &ArbitrageRow {
        &self.arbitrage
    }

    pub fn odds(&self) -> &OddsRow {
        self.arbitrage.odds()
    }

    pub fn game(&self) -> &GameInfo {
        &self.arbitrage.odds().game
    }

    pub fn game_id(&self) -> &GameId {
        self.arbitrage.game_id()
    }

    pub fn outcome(&self) -> &str {
        &self.arbitrage.odds().outcome
    }

    pub fn price(&self) -> Price {
        self.arbitrage.price()
    }

    pub fn implied_probability(&self) -> Probability {
        self.arbitrage.implied_probability()
    }

    pub fn sum_implied_probability(&self) -> Probability {
        self.arbitrage.sum_implied_probability()
    }

    /// Amount to place on this outcome.
    pub fn stake(&self) -> Stake {
        self.stake
    }

    /// 1 - sum of implied probabilities; identical for every outcome of a game.
    pub fn roi(&self) -> Probability {
        self.roi
    }

    /// What this outcome returns if it wins (stake x price).
    ///
    /// Equal across all outcomes of a game: `total_stake / sum_implied_probability`.
    pub fn payout(&self) -> Stake {
        self.payout
    }

    /// Exact guaranteed profit as a fraction of the total stake: `1 / sum - 1`.
    pub fn profit_margin(&self) -> Probability {
        let sum = self.sum_implied_probability();
        if sum <= Probability::ZERO {
            return Probability::ZERO;
        }
        Probability::ONE
            .checked_div(sum)
            .map_or(Probability::ZERO, |inverse| inverse - Probability::ONE)
    }

    /// False when the game's best-price outcome set is smaller than the
    /// outcome set the bookmakers quoted before exchange filtering.
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
