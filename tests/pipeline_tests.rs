//! End-to-end pipeline tests over provider-shaped game records.

mod support;

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use oddsarb::application::pipeline::{
    default_excluded, find_arbitrage, flatten, group_by_game, remove_excluded,
    select_best_prices, Pipeline, PipelineConfig,
};
use oddsarb::domain::{BookmakerKey, GameRecord};

use support::assertions::{assert_decimal_near, assert_equal_payouts};
use support::builders::{bookmaker, game};

fn two_bookmaker_game() -> GameRecord {
    game(
        "g1",
        "Arsenal",
        "Chelsea",
        vec![
            bookmaker("williamhill", &[("Arsenal", dec!(2.10)), ("Chelsea", dec!(2.05))]),
            bookmaker("unibet", &[("Arsenal", dec!(1.95)), ("Chelsea", dec!(2.20))]),
        ],
    )
}

fn mixed_snapshot() -> Vec<GameRecord> {
    vec![
        two_bookmaker_game(),
        game(
            "g2",
            "Spurs",
            "Everton",
            vec![bookmaker("paddypower", &[("Spurs", dec!(1.80)), ("Everton", dec!(1.90))])],
        ),
        game(
            "g3",
            "Leeds",
            "Fulham",
            vec![
                bookmaker(
                    "skybet",
                    &[("Leeds", dec!(3.40)), ("Fulham", dec!(2.30)), ("Draw", dec!(3.30))],
                ),
                bookmaker(
                    "coral",
                    &[("Leeds", dec!(2.90)), ("Fulham", dec!(2.60)), ("Draw", dec!(3.60))],
                ),
                bookmaker(
                    "betfair_ex_uk",
                    &[("Leeds", dec!(9.0)), ("Fulham", dec!(9.0)), ("Draw", dec!(9.0))],
                ),
            ],
        ),
    ]
}

#[test]
fn two_bookmaker_scenario_allocates_expected_stakes() {
    let rows = Pipeline::default().run(&[two_bookmaker_game()]).unwrap();

    assert_eq!(rows.len(), 2);
    let arsenal = rows.iter().find(|r| r.outcome() == "Arsenal").unwrap();
    let chelsea = rows.iter().find(|r| r.outcome() == "Chelsea").unwrap();

    assert_eq!(arsenal.price(), dec!(2.10));
    assert_eq!(arsenal.odds().bookmaker_key, Some(BookmakerKey::from("williamhill")));
    assert_eq!(chelsea.price(), dec!(2.20));
    assert_eq!(chelsea.odds().bookmaker_key, Some(BookmakerKey::from("unibet")));

    assert_decimal_near(arsenal.sum_implied_probability(), dec!(0.930736), dec!(0.000001));
    assert_decimal_near(arsenal.stake(), dec!(511.63), dec!(0.01));
    assert_decimal_near(chelsea.stake(), dec!(488.37), dec!(0.01));
    assert_decimal_near(arsenal.payout(), dec!(1074.42), dec!(0.01));
    assert_decimal_near(arsenal.roi(), dec!(0.0693), dec!(0.0001));
    assert!(arsenal.is_complete());
}

#[test]
fn single_bookmaker_without_arbitrage_yields_nothing() {
    let snapshot = vec![game(
        "g2",
        "Spurs",
        "Everton",
        vec![bookmaker("paddypower", &[("Spurs", dec!(1.80)), ("Everton", dec!(1.90))])],
    )];

    assert!(Pipeline::default().run(&snapshot).unwrap().is_empty());
}

#[test]
fn empty_snapshot_yields_nothing() {
    assert!(Pipeline::default().run(&[]).unwrap().is_empty());
}

#[test]
fn best_price_is_the_group_maximum() {
    let snapshot = mixed_snapshot();
    let odds = remove_excluded(flatten(&snapshot), &default_excluded());

    let mut expected: HashMap<(String, String), Decimal> = HashMap::new();
    for row in &odds {
        let key = (row.game.id.to_string(), row.outcome.clone());
        let best = expected.entry(key).or_insert(row.price);
        *best = (*best).max(row.price);
    }

    let best = select_best_prices(odds).unwrap();

    assert_eq!(best.len(), expected.len());
    for row in &best {
        let key = (row.game_id().to_string(), row.outcome().to_string());
        assert_eq!(row.price(), expected[&key]);
    }
}

#[test]
fn retained_games_sum_below_one() {
    let snapshot = mixed_snapshot();
    let best = select_best_prices(remove_excluded(flatten(&snapshot), &default_excluded())).unwrap();

    let arbitrage = find_arbitrage(best);

    assert!(!arbitrage.is_empty());
    for row in &arbitrage {
        assert!(row.sum_implied_probability() < Decimal::ONE);
    }
}

#[test]
fn stakes_sum_to_total_and_payouts_match() {
    let rows = Pipeline::default().run(&mixed_snapshot()).unwrap();
    let games = group_by_game(&rows);

    // g1 (two-way) and g3 (three-way, once the exchange is dropped)
    assert_eq!(games.len(), 2);
    for game_rows in &games {
        let total: Decimal = game_rows.iter().map(|r| r.stake()).sum();
        assert_decimal_near(total, dec!(1000), dec!(0.000001));
        assert_equal_payouts(game_rows, dec!(0.000001));
    }
}

#[test]
fn three_way_game_uses_best_of_each_outcome() {
    let rows = Pipeline::default().run(&mixed_snapshot()).unwrap();

    let g3: Vec<_> = rows.iter().filter(|r| r.game_id().as_str() == "g3").collect();
    assert_eq!(g3.len(), 3);

    let prices: HashMap<&str, Decimal> = g3.iter().map(|r| (r.outcome(), r.price())).collect();
    assert_eq!(prices["Leeds"], dec!(3.40));
    assert_eq!(prices["Fulham"], dec!(2.60));
    assert_eq!(prices["Draw"], dec!(3.60));
}

#[test]
fn excluded_bookmakers_never_reach_output() {
    let rows = Pipeline::default().run(&mixed_snapshot()).unwrap();
    let excluded = default_excluded();

    for row in &rows {
        let key = row.odds().bookmaker_key.as_ref().unwrap();
        assert!(!excluded.contains(key), "{key} should have been filtered");
    }
}

#[test]
fn exchange_prices_count_when_filter_is_empty() {
    let pipeline = Pipeline::new(PipelineConfig {
        excluded_bookmakers: HashSet::new(),
        ..PipelineConfig::default()
    });

    let rows = pipeline.run(&mixed_snapshot()).unwrap();

    assert!(rows
        .iter()
        .filter(|r| r.game_id().as_str() == "g3")
        .all(|r| r.odds().bookmaker_key == Some(BookmakerKey::from("betfair_ex_uk"))));
}

#[test]
fn running_twice_gives_identical_output() {
    let snapshot = mixed_snapshot();
    let pipeline = Pipeline::default();

    assert_eq!(pipeline.run(&snapshot).unwrap(), pipeline.run(&snapshot).unwrap());
}

#[test]
fn outcome_only_quoted_by_exchange_marks_game_incomplete() {
    let snapshot = vec![game(
        "g4",
        "Wolves",
        "Brentford",
        vec![
            bookmaker("skybet", &[("Wolves", dec!(2.50)), ("Brentford", dec!(3.10))]),
            bookmaker(
                "matchbook",
                &[("Wolves", dec!(2.40)), ("Brentford", dec!(3.00)), ("Draw", dec!(3.50))],
            ),
        ],
    )];

    let rows = Pipeline::default().run(&snapshot).unwrap();

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| !r.is_complete()));
}

#[test]
fn custom_stake_scales_allocation() {
    let pipeline = Pipeline::new(PipelineConfig {
        total_stake: dec!(100),
        ..PipelineConfig::default()
    });

    let rows = pipeline.run(&[two_bookmaker_game()]).unwrap();
    let total: Decimal = rows.iter().map(|r| r.stake()).sum();

    assert_decimal_near(total, dec!(100), dec!(0.000001));
    assert_decimal_near(rows[0].stake(), dec!(51.16), dec!(0.01));
}
