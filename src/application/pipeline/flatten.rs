//! Nested snapshot to flat odds table.

use tracing::debug;

use crate::domain::{GameInfo, GameRecord, OddsRow, Price};

/// Flatten game records into one row per priced outcome quote.
///
/// Games without an id and outcomes without a name or a price above 1.0
/// produce no rows, since they can't be grouped or priced downstream.
pub fn flatten(games: &[GameRecord]) -> Vec<OddsRow> {
    let mut rows = Vec::new();

    for game in games {
        let Some(id) = game.id.clone() else {
            debug!(fixture = %game.fixture(), "Skipping game without id");
            continue;
        };
        let info = GameInfo {
            id,
            sport_key: game.sport_key.clone(),
            sport_title: game.sport_title.clone(),
            home_team: game.home_team.clone(),
            away_team: game.away_team.clone(),
            commence_time: game.commence_time,
        };

        for bookmaker in &game.bookmakers {
            for market in &bookmaker.markets {
                for outcome in &market.outcomes {
                    let (Some(name), Some(price)) = (&outcome.name, outcome.price) else {
                        debug!(
                            game_id = %info.id,
                            bookmaker = ?bookmaker.key,
                            "Skipping outcome without name or price"
                        );
                        continue;
                    };
                    if price <= Price::ONE {
                        debug!(
                            game_id = %info.id,
                            bookmaker = ?bookmaker.key,
                            outcome = %name,
                            %price,
                            "Skipping outcome priced at or below 1.0"
                        );
                        continue;
                    }

                    rows.push(OddsRow {
                        game: info.clone(),
                        bookmaker_key: bookmaker.key.clone(),
                        bookmaker_title: bookmaker.title.clone(),
                        bookmaker_last_update: bookmaker.last_update,
                        market_key: market.key.clone(),
                        market_last_update: market.last_update,
                        outcome: name.clone(),
                        price,
                    });
                }
            }
        }
    }

    debug!(games = games.len(), rows = rows.len(), "Flattened odds snapshot");
    rows
}
