// ABOUTME: FanMatch normalizer combining the parsed game string, parsed prediction and game metadata.
// ABOUTME: Possessions fall back to the predicted count when the game string carries none.

use hoops_tables::{Html, TableSpec};

use crate::endpoint::Endpoint;
use crate::game::parse_game;
use crate::normalize::{data_rows, schema_rows, take};
use crate::prediction::parse_prediction;
use crate::records::FanMatchGame;
use crate::Result;

/// One day of FanMatch games.
pub fn fanmatch(doc: &Html, table: &TableSpec) -> Result<Vec<FanMatchGame>> {
    let rows = data_rows(schema_rows(doc, table, &Endpoint::FanMatch, None)?, "Game");

    let games = rows
        .into_iter()
        .map(|mut row| {
            let game = take(&mut row, "Game");
            let parsed = parse_game(Some(&game));
            let prediction = parse_prediction(row.get("Prediction"));
            let possessions = parsed.possessions.or(prediction.predicted_possessions);

            FanMatchGame {
                game,
                result: parsed.result,
                prediction,
                time: row.remove("Time"),
                location: row.remove("Location"),
                mvp: parsed.mvp,
                tournament: parsed.tournament,
                possessions,
                thrill_score: row.remove("ThrillScore"),
                comeback: row.remove("Comeback"),
                excitement: row.remove("Excitement"),
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(games = games.len(), "normalized fanmatch");
    Ok(games)
}
