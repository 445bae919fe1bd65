// ABOUTME: Normalizers for the wide one-row-per-team pages: ratings, efficiency, four factors and friends.
// ABOUTME: Splits seeds off team names and lifts the conference column out of the stat map.

use hoops_tables::{Html, TableSpec};

use crate::endpoint::Endpoint;
use crate::fields::split_seed;
use crate::normalize::{data_rows, schema_rows, take};
use crate::records::TeamStats;
use crate::Result;

/// Conference column labels, which differ between pages.
const CONFERENCE_COLUMNS: &[&str] = &["Conf", "Conference"];

fn team_table(
    doc: &Html,
    table: &TableSpec,
    endpoint: Endpoint,
    season: Option<u16>,
) -> Result<Vec<TeamStats>> {
    let rows = data_rows(schema_rows(doc, table, &endpoint, season)?, "Team");

    let records = rows
        .into_iter()
        .map(|mut row| {
            let (team, seed) = split_seed(&take(&mut row, "Team"));
            let conference = CONFERENCE_COLUMNS
                .iter()
                .find_map(|column| row.remove(column));
            TeamStats {
                team,
                seed,
                conference,
                stats: row,
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(%endpoint, teams = records.len(), "normalized team table");
    Ok(records)
}

/// Main ratings table (`index.php`).
pub fn ratings(doc: &Html, table: &TableSpec, season: Option<u16>) -> Result<Vec<TeamStats>> {
    team_table(doc, table, Endpoint::Ratings, season)
}

/// Team names of the ratings table, without seeds.
pub fn teams(doc: &Html, table: &TableSpec, season: Option<u16>) -> Result<Vec<String>> {
    Ok(ratings(doc, table, season)?
        .into_iter()
        .map(|record| record.team)
        .collect())
}

/// Tempo and efficiency summary (`summary.php`).
pub fn efficiency(doc: &Html, table: &TableSpec, season: Option<u16>) -> Result<Vec<TeamStats>> {
    team_table(doc, table, Endpoint::Efficiency, season)
}

pub fn four_factors(doc: &Html, table: &TableSpec, season: Option<u16>) -> Result<Vec<TeamStats>> {
    team_table(doc, table, Endpoint::FourFactors, season)
}

/// Miscellaneous team stats; `defense` reads the opponents' view of the page.
pub fn team_stats(
    doc: &Html,
    table: &TableSpec,
    season: Option<u16>,
    defense: bool,
) -> Result<Vec<TeamStats>> {
    team_table(doc, table, Endpoint::TeamStats { defense }, season)
}

pub fn point_distribution(
    doc: &Html,
    table: &TableSpec,
    season: Option<u16>,
) -> Result<Vec<TeamStats>> {
    team_table(doc, table, Endpoint::PointDistribution, season)
}

/// Height, experience, bench and (from 2008) continuity.
pub fn height(doc: &Html, table: &TableSpec, season: Option<u16>) -> Result<Vec<TeamStats>> {
    team_table(doc, table, Endpoint::Height, season)
}

pub fn home_court(doc: &Html, table: &TableSpec, season: Option<u16>) -> Result<Vec<TeamStats>> {
    team_table(doc, table, Endpoint::HomeCourt, season)
}

/// All-time program ratings. The page has no season and no conference column.
pub fn program_ratings(doc: &Html, table: &TableSpec) -> Result<Vec<TeamStats>> {
    team_table(doc, table, Endpoint::ProgramRatings, None)
}
