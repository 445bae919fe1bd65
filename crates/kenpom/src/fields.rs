// ABOUTME: Helpers splitting decorated identifier cells and compound "name (number)" cells.
// ABOUTME: Also detects header rows the source repeats inside table bodies.

//! Field decomposition helpers.
//!
//! Key behaviors:
//! - Missing decorations give empty strings, never `None`.
//! - Text that does not match a pattern is passed through unchanged.

use hoops_tables::Row;
use once_cell::sync::Lazy;
use regex::Regex;

static SEED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*?)\s+(\d+)$").unwrap());
static CAPACITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*?)\s*\((\d+)\)$").unwrap());

/// Returns the trailing tournament seed of a team cell (`"Duke 1"` -> `"1"`).
pub fn extract_seed(text: &str) -> String {
    SEED_RE
        .captures(text.trim())
        .map(|caps| caps[2].to_string())
        .unwrap_or_default()
}

/// Returns the team name without its trailing seed (`"Duke 1"` -> `"Duke"`).
pub fn strip_seed(text: &str) -> String {
    let text = text.trim();
    match SEED_RE.captures(text) {
        Some(caps) => caps[1].to_string(),
        None => text.to_string(),
    }
}

/// Splits `(name, seed)` in one pass.
pub fn split_seed(text: &str) -> (String, String) {
    (strip_seed(text), extract_seed(text))
}

/// Splits `"Cameron Indoor Stadium (9314)"` into base text and capacity.
///
/// Text without a trailing parenthesized number comes back unchanged with an
/// empty capacity.
pub fn split_capacity(text: &str) -> (String, String) {
    let text = text.trim();
    match CAPACITY_RE.captures(text) {
        Some(caps) => (caps[1].to_string(), caps[2].to_string()),
        None => (text.to_string(), String::new()),
    }
}

/// True when `column` is missing or empty in `row`, or holds the column's own
/// header label (a header row repeated inside the body).
pub fn is_header_or_empty(row: &Row, column: &str, label: &str) -> bool {
    match row.get(column) {
        None => true,
        Some(value) => value.is_empty() || value == label,
    }
}
