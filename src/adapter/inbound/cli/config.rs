//! Handler for the `config` command group.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, API_KEY_ENV};

/// Execute `config show`.
pub fn execute_show(path: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default(path)?;

    output::section("Effective Configuration");
    output::field(
        "Source",
        path.map_or_else(|| "defaults".to_string(), |p| p.display().to_string()),
    );

    output::section("Odds");
    output::field("API", &config.odds.api_url);
    output::field("Sport", &config.odds.sport);
    output::field("Region", &config.odds.region);
    output::field("Market", &config.odds.market);
    output::field("Timeout", format!("{}s", config.odds.timeout_secs));
    output::field(
        "API key",
        if config.odds.api_key.is_some() {
            "set"
        } else {
            "not set"
        },
    );

    output::section("Stake");
    output::field(
        "Total",
        format!("{}{}", config.report.currency, config.stake.total),
    );

    output::section("Excluded bookmakers");
    if config.filter.excluded_bookmakers.is_empty() {
        output::note("(none)");
    } else {
        for key in &config.filter.excluded_bookmakers {
            output::note(&format!("- {key}"));
        }
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default(path)?;

    output::section("Configuration");
    output::success("Configuration is valid");
    if let Some(path) = path {
        output::field("Path", path.display());
    }
    if config.odds.api_key.is_none() {
        output::note(&format!(
            "{API_KEY_ENV} is not set; live scans need it (snapshot scans don't)"
        ));
    }
    Ok(())
}
