// ABOUTME: Header synthesizer deriving column names from a table's header row.
// ABOUTME: Offers positional (_{i}) and rank (.Rank) suffixing for repeated header labels.

//! Header-derived column names.
//!
//! Most pages are read with fixed ordinal schemas, but a few tables have no
//! stable column set and are keyed by their own header text instead. Two
//! conventions exist for repeated labels and they produce different keys, so
//! each has its own function:
//!
//! - [`indexed_headers`]: a repeat is an unrelated collision and gets the
//!   column position appended (`Tempo_4`).
//! - [`ranked_headers`]: a repeat is the rank column of the stat before it
//!   (`eFG%.Rank`).
//!
//! In both, an empty header becomes `Column{i}`.

use scraper::ElementRef;

use crate::extract::{cell_elements, cell_text, child_elements, extract_rows};
use crate::row::Row;

/// Returns the raw header texts of a table in column order.
///
/// Reads the last row of the `thead` (the first rows of multi-row headers are
/// group labels spanning several columns). Without a `thead`, the first table
/// row is the header. Both `th` and `td` cells are read.
pub fn header_cells(table: ElementRef<'_>) -> Vec<String> {
    let header_row = match child_elements(table, "thead").last() {
        Some(thead) => child_elements(thead, "tr").last(),
        None => first_row(table),
    };

    match header_row {
        Some(tr) => cell_elements(tr).map(cell_text).collect(),
        None => vec![],
    }
}

fn first_row(table: ElementRef<'_>) -> Option<ElementRef<'_>> {
    child_elements(table, "tbody")
        .flat_map(|body| child_elements(body, "tr"))
        .chain(child_elements(table, "tr"))
        .next()
}

/// Header names with repeats suffixed by their column position.
pub fn indexed_headers(table: ElementRef<'_>) -> Vec<String> {
    suffix_indexed(header_cells(table))
}

/// Header names with a repeated label treated as the rank of the earlier stat.
pub fn ranked_headers(table: ElementRef<'_>) -> Vec<String> {
    suffix_ranked(header_cells(table))
}

/// Applies the positional convention to raw header texts.
pub fn suffix_indexed(raw: Vec<String>) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(raw.len());
    for (i, text) in raw.into_iter().enumerate() {
        let name = if text.is_empty() {
            format!("Column{}", i)
        } else if names.contains(&text) {
            format!("{}_{}", text, i)
        } else {
            text
        };
        names.push(name);
    }
    names
}

/// Applies the rank convention to raw header texts.
pub fn suffix_ranked(raw: Vec<String>) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(raw.len());
    for (i, text) in raw.into_iter().enumerate() {
        let name = if text.is_empty() {
            format!("Column{}", i)
        } else if names.contains(&text) {
            let rank = format!("{}.Rank", text);
            if names.contains(&rank) {
                format!("{}_{}", rank, i)
            } else {
                rank
            }
        } else {
            text
        };
        names.push(name);
    }
    names
}

/// Extracts body rows keyed by synthesized header names.
///
/// Body rows whose texts repeat the raw header row are skipped. Without a
/// `thead` this is the header row itself.
pub fn extract_with_headers(table: ElementRef<'_>, headers: &[String]) -> Vec<Row> {
    let raw = header_cells(table);
    tracing::debug!(?headers, "extracting with derived headers");

    extract_rows(table, headers)
        .into_iter()
        .filter(|row| !repeats_header(row, &raw))
        .collect()
}

fn repeats_header(row: &Row, raw: &[String]) -> bool {
    row.len() == raw.len() && row.iter().map(|(_, v)| v).eq(raw.iter().map(String::as_str))
}
