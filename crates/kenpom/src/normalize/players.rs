// ABOUTME: Player stats normalizer reading every player table on the page with rank-suffixed headers.
// ABOUTME: Tables without a "Player" column (navigation, legends) are skipped.

use hoops_tables::{extract_with_headers, locate_tables, ranked_headers, Html, TableError, TableSpec};

use crate::normalize::{data_rows, take};
use crate::records::PlayerStat;
use crate::Result;

/// Rank column labels; an unlabeled first column gets a positional name.
const RANK_COLUMNS: &[&str] = &["Rk", "Rank", "Column0"];

/// Player leaderboards. The page lists one table per stat (or conference),
/// so every table matching the selector is read and `table.index` is ignored.
pub fn player_stats(doc: &Html, table: &TableSpec) -> Result<Vec<PlayerStat>> {
    let tables = locate_tables(doc, &table.selector);
    let mut players = Vec::new();
    let mut read = 0usize;

    for element in tables {
        let headers = ranked_headers(element);
        if !headers.iter().any(|h| h == "Player") {
            continue;
        }
        read += 1;

        let rows = data_rows(extract_with_headers(element, &headers), "Player");
        players.extend(rows.into_iter().map(|mut row| {
            let rank = RANK_COLUMNS
                .iter()
                .find_map(|column| row.remove(column))
                .unwrap_or_default();
            PlayerStat {
                rank,
                player: take(&mut row, "Player"),
                team: take(&mut row, "Team"),
                stats: row,
            }
        }));
    }

    if read == 0 {
        return Err(TableError::not_found(&table.selector, table.index));
    }
    tracing::debug!(tables = read, players = players.len(), "normalized player stats");
    Ok(players)
}
