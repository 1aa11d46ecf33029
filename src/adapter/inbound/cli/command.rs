//! Command-line interface definitions.
//!
//! Defines the CLI structure for the oddsarb application using `clap`.
//! `scan` fetches one odds snapshot and reports arbitrage opportunities;
//! `config` inspects the effective configuration.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Sports betting arbitrage finder
#[derive(Parser, Debug)]
#[command(name = "oddsarb")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the oddsarb CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch odds once and report arbitrage opportunities
    Scan(ScanArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `oddsarb config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Optional configuration file path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file (defaults are used when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `scan` subcommand.
///
/// Every flag overrides the matching configuration value.
#[derive(Parser, Debug, Default)]
pub struct ScanArgs {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sport key, e.g. soccer_epl.
    #[arg(long)]
    pub sport: Option<String>,

    /// Bookmaker region, e.g. uk.
    #[arg(long)]
    pub region: Option<String>,

    /// Market key, e.g. h2h.
    #[arg(long)]
    pub market: Option<String>,

    /// Total amount to split across each game's outcomes.
    #[arg(long)]
    pub stake: Option<Decimal>,

    /// Odds provider API key (falls back to ODDS_API_KEY).
    #[arg(long, env = "ODDS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Read odds from a saved JSON response instead of the API.
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long)]
    pub json_logs: bool,
}
