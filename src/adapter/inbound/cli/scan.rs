//! Handler for the `scan` command.
//!
//! One pass: fetch a snapshot, run the pipeline, print the report. A source
//! that can't deliver odds is logged and ends the run without a report; it
//! isn't treated as a failure of the command.

use tracing::{error, info};

use crate::adapter::inbound::cli::command::ScanArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::console::ConsoleReporter;
use crate::adapter::outbound::odds_api::OddsApiClient;
use crate::adapter::outbound::snapshot::SnapshotFile;
use crate::application::pipeline::Pipeline;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::{OddsRequest, OddsSource, Reporter};

/// How a scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Opportunities were found and reported.
    Reported { games: usize },
    /// The snapshot held no arbitrage.
    NoOpportunities,
    /// The odds source failed; nothing was reported.
    SourceFailed,
}

/// Execute the scan command.
pub async fn execute(args: &ScanArgs) -> Result<ScanOutcome> {
    let config = build_config(args)?;
    config.init_logging();

    let source: Box<dyn OddsSource> = match &args.snapshot {
        Some(path) => Box::new(SnapshotFile::new(path)),
        None => Box::new(OddsApiClient::from_config(&config.odds, config.api_key()?)),
    };
    let pipeline = Pipeline::new(config.pipeline_config());
    let mut reporter = ConsoleReporter::stdout(config.report.currency.clone(), output::is_color());

    scan(source.as_ref(), &config.odds.request(), &pipeline, &mut reporter).await
}

/// Load configuration and apply the command-line overrides.
///
/// # Errors
///
/// Returns a configuration error if the file is unreadable or the merged
/// values fail validation.
pub fn build_config(args: &ScanArgs) -> Result<Config> {
    let mut config = Config::load_or_default(args.config.as_deref())?;
    apply_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut Config, args: &ScanArgs) {
    if let Some(sport) = &args.sport {
        config.odds.sport.clone_from(sport);
    }
    if let Some(region) = &args.region {
        config.odds.region.clone_from(region);
    }
    if let Some(market) = &args.market {
        config.odds.market.clone_from(market);
    }
    if let Some(stake) = args.stake {
        config.stake.total = stake;
    }
    if let Some(key) = args.api_key.as_deref().map(str::trim) {
        if !key.is_empty() {
            config.odds.api_key = Some(key.to_string());
        }
    }
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
}

/// Fetch, detect and report.
///
/// # Errors
///
/// Returns an error only when the pipeline or the reporter fails. Source
/// failures are logged and yield [`ScanOutcome::SourceFailed`].
pub async fn scan<S, R>(
    source: &S,
    request: &OddsRequest,
    pipeline: &Pipeline,
    reporter: &mut R,
) -> Result<ScanOutcome>
where
    S: OddsSource + ?Sized,
    R: Reporter,
{
    let games = match source.fetch(request).await {
        Ok(games) => games,
        Err(e) => {
            error!(
                source = source.source_name(),
                unavailable = e.is_unavailable(),
                error = %e,
                "Failed to fetch odds"
            );
            return Ok(ScanOutcome::SourceFailed);
        }
    };

    let rows = pipeline.run(&games)?;
    if rows.is_empty() {
        info!(games = games.len(), "No arbitrage opportunities found");
        return Ok(ScanOutcome::NoOpportunities);
    }

    reporter.report(&rows)?;
    let games = crate::application::pipeline::group_by_game(&rows).len();
    Ok(ScanOutcome::Reported { games })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        BookmakerKey, BookmakerQuote, GameId, GameRecord, MarketQuote, OutcomeQuote, StakedRow,
    };
    use crate::error::SourceError;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    struct FixedSource(Vec<GameRecord>);

    #[async_trait]
    impl OddsSource for FixedSource {
        async fn fetch(&self, _: &OddsRequest) -> std::result::Result<Vec<GameRecord>, SourceError> {
            Ok(self.0.clone())
        }

        fn source_name(&self) -> &'static str {
            "fixed"
        }
    }

    struct DownSource;

    #[async_trait]
    impl OddsSource for DownSource {
        async fn fetch(&self, _: &OddsRequest) -> std::result::Result<Vec<GameRecord>, SourceError> {
            Err(SourceError::Status {
                status: 503,
                body: "maintenance".into(),
            })
        }

        fn source_name(&self) -> &'static str {
            "down"
        }
    }

    #[derive(Default)]
    struct Collect(Vec<StakedRow>);

    impl Reporter for Collect {
        fn report(&mut self, rows: &[StakedRow]) -> Result<()> {
            self.0.extend_from_slice(rows);
            Ok(())
        }
    }

    fn game(id: &str, quotes: &[(&str, Decimal, Decimal)]) -> GameRecord {
        GameRecord {
            id: Some(GameId::from(id)),
            home_team: Some("Home".into()),
            away_team: Some("Away".into()),
            bookmakers: quotes
                .iter()
                .map(|(key, home, away)| BookmakerQuote {
                    key: Some(BookmakerKey::from(*key)),
                    markets: vec![MarketQuote {
                        key: Some("h2h".into()),
                        outcomes: vec![
                            OutcomeQuote {
                                name: Some("Home".into()),
                                price: Some(*home),
                            },
                            OutcomeQuote {
                                name: Some("Away".into()),
                                price: Some(*away),
                            },
                        ],
                        ..Default::default()
                    }],
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn request() -> OddsRequest {
        OddsRequest {
            sport: "soccer_epl".into(),
            region: "uk".into(),
            market: "h2h".into(),
        }
    }

    #[tokio::test]
    async fn reports_arbitrage_games() {
        let source = FixedSource(vec![
            game("g1", &[("a", dec!(2.10), dec!(2.05)), ("b", dec!(1.95), dec!(2.20))]),
            game("g2", &[("a", dec!(1.80), dec!(1.90))]),
        ]);
        let mut reporter = Collect::default();

        let outcome = scan(&source, &request(), &Pipeline::default(), &mut reporter)
            .await
            .unwrap();

        assert_eq!(outcome, ScanOutcome::Reported { games: 1 });
        assert_eq!(reporter.0.len(), 2);
    }

    #[tokio::test]
    async fn no_arbitrage_skips_reporter() {
        let source = FixedSource(vec![game("g1", &[("a", dec!(1.80), dec!(1.90))])]);
        let mut reporter = Collect::default();

        let outcome = scan(&source, &request(), &Pipeline::default(), &mut reporter)
            .await
            .unwrap();

        assert_eq!(outcome, ScanOutcome::NoOpportunities);
        assert!(reporter.0.is_empty());
    }

    #[tokio::test]
    async fn source_failure_ends_run_quietly() {
        let mut reporter = Collect::default();

        let outcome = scan(&DownSource, &request(), &Pipeline::default(), &mut reporter)
            .await
            .unwrap();

        assert_eq!(outcome, ScanOutcome::SourceFailed);
        assert!(reporter.0.is_empty());
    }

    #[test]
    fn flags_override_config() {
        let args = ScanArgs {
            sport: Some("tennis_atp".into()),
            stake: Some(dec!(50)),
            api_key: Some(" key ".into()),
            json_logs: true,
            ..Default::default()
        };

        let config = build_config(&args).unwrap();

        assert_eq!(config.odds.sport, "tennis_atp");
        assert_eq!(config.stake.total, dec!(50));
        assert_eq!(config.odds.api_key.as_deref(), Some("key"));
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn log_level_and_market_overrides_are_validated() {
        let args = ScanArgs {
            log_level: Some("garbage".into()),
            ..Default::default()
        };
        assert!(build_config(&args).is_err());

        let args = ScanArgs {
            market: Some("h2h,totals".into()),
            ..Default::default()
        };
        assert!(build_config(&args).is_err());

        let args = ScanArgs {
            log_level: Some("oddsarb=debug".into()),
            ..Default::default()
        };
        assert_eq!(build_config(&args).unwrap().logging.level, "oddsarb=debug");
    }

    #[test]
    fn invalid_override_is_rejected() {
        let args = ScanArgs {
            stake: Some(dec!(-1)),
            ..Default::default()
        };

        assert!(build_config(&args).is_err());
    }
}
