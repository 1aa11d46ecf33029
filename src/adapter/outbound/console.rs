//! Console report of arbitrage opportunities.
//!
//! One section per game: fixture, kickoff, a table of outcomes with the
//! bookmaker to use, the price and the stake, then the ROI.

use std::io::{self, Write};

use owo_colors::OwoColorize;
use rust_decimal::{Decimal, RoundingStrategy};
use tabled::{Table, Tabled};

use crate::application::pipeline::group_by_game;
use crate::domain::StakedRow;
use crate::error::Result;
use crate::port::Reporter;

const RULE_WIDTH: usize = 56;

#[derive(Tabled)]
struct OutcomeLine {
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Bookmaker")]
    bookmaker: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Payout")]
    payout: String,
}

/// Writes the report as text to any writer.
pub struct ConsoleReporter<W: Write> {
    out: W,
    currency: String,
    color: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter writing to standard output.
    pub fn stdout(currency: impl Into<String>, color: bool) -> Self {
        Self::new(io::stdout(), currency, color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, currency: impl Into<String>, color: bool) -> Self {
        Self {
            out,
            currency: currency.into(),
            color,
        }
    }

    /// Consume the reporter and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_game(&mut self, rows: &[&StakedRow]) -> io::Result<()> {
        let Some(first) = rows.first() else {
            return Ok(());
        };
        let game = first.game();
        let kickoff = game
            .commence_time
            .map_or_else(|| "unknown".to_string(), |t| t.format("%Y-%m-%d %H:%M UTC").to_string());

        let title = game.fixture();
        let title = if self.color {
            title.bold().to_string()
        } else {
            title
        };

        writeln!(self.out)?;
        writeln!(self.out, "{}", "═".repeat(RULE_WIDTH))?;
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "  {:<14} {}", "Game ID", game.id)?;
        if let Some(sport) = game.sport_title.as_deref().or(game.sport_key.as_deref()) {
            writeln!(self.out, "  {:<14} {}", "Sport", sport)?;
        }
        writeln!(self.out, "  {:<14} {}", "Commence", kickoff)?;
        writeln!(self.out)?;

        let lines: Vec<OutcomeLine> = rows
            .iter()
            .map(|row| OutcomeLine {
                outcome: row.outcome().to_string(),
                bookmaker: row.odds().bookmaker_label().to_string(),
                odds: two_places(row.price()),
                stake: format!("{}{}", self.currency, two_places(row.stake())),
                payout: format!("{}{}", self.currency, two_places(row.payout())),
            })
            .collect();
        writeln!(self.out, "{}", Table::new(lines))?;

        let roi = percent(first.roi());
        let roi = if self.color {
            roi.green().to_string()
        } else {
            roi
        };
        writeln!(self.out)?;
        writeln!(self.out, "  {:<14} {}", "Estimated ROI", roi)?;

        if !first.is_complete() {
            let note = "⚠ some outcomes were only quoted by excluded bookmakers; this may not be a real arbitrage";
            if self.color {
                writeln!(self.out, "  {}", note.yellow())?;
            } else {
                writeln!(self.out, "  {note}")?;
            }
        }

        writeln!(self.out, "{}", "═".repeat(RULE_WIDTH))?;
        Ok(())
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, rows: &[StakedRow]) -> Result<()> {
        for game in group_by_game(rows) {
            self.render_game(&game)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

fn two_places(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn percent(fraction: Decimal) -> String {
    format!("{}%", two_places(fraction * Decimal::ONE_HUNDRED))
}
