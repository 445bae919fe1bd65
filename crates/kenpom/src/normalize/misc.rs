// ABOUTME: Normalizers for arenas, referees, game attributes and the header-keyed trends table.
// ABOUTME: Splits "name (capacity)" arena cells and parses game attribute game strings.

use hoops_tables::{extract_with_headers, indexed_headers, locate_table, Html, Row, TableSpec};

use crate::endpoint::{Endpoint, GameMetric};
use crate::fields::split_capacity;
use crate::game::parse_game_result;
use crate::normalize::{data_rows, schema_rows, take};
use crate::records::{Arena, GameAttribute, Referee};
use crate::Result;

/// Home arenas with capacities. An empty alternate arena gives empty strings
/// for both alternate fields.
pub fn arenas(doc: &Html, table: &TableSpec, season: Option<u16>) -> Result<Vec<Arena>> {
    let rows = data_rows(schema_rows(doc, table, &Endpoint::Arenas, season)?, "Team");

    Ok(rows
        .into_iter()
        .map(|mut row| {
            let (arena, arena_capacity) = split_capacity(&take(&mut row, "Arena"));
            let (alternate, alternate_capacity) = split_capacity(&take(&mut row, "Alternate"));
            Arena {
                rank: take(&mut row, "Rank"),
                team: take(&mut row, "Team"),
                conference: take(&mut row, "Conference"),
                arena,
                arena_capacity,
                alternate,
                alternate_capacity,
            }
        })
        .collect())
}

/// Officiating ratings. The trailing box score link column is dropped.
pub fn referees(doc: &Html, table: &TableSpec, season: Option<u16>) -> Result<Vec<Referee>> {
    let rows = data_rows(schema_rows(doc, table, &Endpoint::Referees, season)?, "Ref");

    Ok(rows
        .into_iter()
        .map(|mut row| Referee {
            rank: take(&mut row, "Rank"),
            name: take(&mut row, "Ref"),
            rating: take(&mut row, "Ref Rating"),
            games: take(&mut row, "Gms"),
            last_game: take(&mut row, "Last Game"),
            game_score: take(&mut row, "Game Score"),
        })
        .collect())
}

/// Top games of a season ranked by `metric`, each game string parsed.
pub fn game_attributes(
    doc: &Html,
    table: &TableSpec,
    season: Option<u16>,
    metric: GameMetric,
) -> Result<Vec<GameAttribute>> {
    let endpoint = Endpoint::GameAttributes { metric };
    let rows = data_rows(schema_rows(doc, table, &endpoint, season)?, "Game");

    Ok(rows
        .into_iter()
        .map(|mut row| {
            let game = take(&mut row, "Game");
            GameAttribute {
                rank: take(&mut row, "Rank"),
                date: take(&mut row, "Date"),
                result: parse_game_result(Some(&game)),
                game,
                location: take(&mut row, "Location"),
                conference: take(&mut row, "Conference"),
                metric: metric.as_str().to_string(),
                value: take(&mut row, metric.as_str()),
            }
        })
        .collect())
}

/// Season-by-season league trends, keyed by the table's own headers.
///
/// Repeated header labels get their column position appended.
pub fn trends(doc: &Html, table: &TableSpec) -> Result<Vec<Row>> {
    let element = locate_table(doc, table)?;
    let headers = indexed_headers(element);
    let rows = extract_with_headers(element, &headers);

    Ok(match headers.first() {
        Some(first) => data_rows(rows, first),
        None => rows,
    })
}
