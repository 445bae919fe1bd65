// ABOUTME: Endpoint normalizers turning located tables into typed records.
// ABOUTME: Shares the locate -> schema -> extract -> filter pipeline used by every fixed-schema page.

//! Endpoint normalizers.
//!
//! Each normalizer takes a parsed document and a [`TableSpec`], and returns
//! records. The only error is a failed table lookup; a malformed row degrades
//! to empty or `None` fields and never aborts the page.

pub mod fanmatch;
pub mod misc;
pub mod players;
pub mod summary;
pub mod team;

use hoops_tables::{extract_rows, locate_table, Html, Row, TableSpec};

use crate::endpoint::Endpoint;
use crate::fields::is_header_or_empty;
use crate::schema::schema;
use crate::Result;

pub use fanmatch::fanmatch;
pub use misc::{arenas, game_attributes, referees, trends};
pub use players::player_stats;
pub use summary::{
    efficiency, four_factors, height, home_court, point_distribution, program_ratings, ratings,
    team_stats, teams,
};
pub use team::{schedule, scouting_report};

/// Locates the table and extracts its rows with the endpoint's schema for
/// `season`.
pub(crate) fn schema_rows(
    doc: &Html,
    table: &TableSpec,
    endpoint: &Endpoint,
    season: Option<u16>,
) -> Result<Vec<Row>> {
    let element = locate_table(doc, table)?;
    let columns = schema(endpoint, season);
    Ok(extract_rows(element, &columns))
}

/// Drops rows whose identifying column is empty or repeats its header label.
pub(crate) fn data_rows(rows: Vec<Row>, column: &str) -> Vec<Row> {
    let before = rows.len();
    let rows: Vec<Row> = rows
        .into_iter()
        .filter(|row| !is_header_or_empty(row, column, column))
        .collect();
    if rows.len() != before {
        tracing::debug!(column, dropped = before - rows.len(), "dropped header rows");
    }
    rows
}

/// Removes `column` from `row`, giving an empty string when it is absent.
pub(crate) fn take(row: &mut Row, column: &str) -> String {
    row.remove(column).unwrap_or_default()
}
