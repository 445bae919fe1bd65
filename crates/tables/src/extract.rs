// ABOUTME: Ordinal row extractor mapping body-row cells to caller-supplied column names.
// ABOUTME: Handles missing thead/tbody wrappers, short rows, extra cells and empty spacer rows.

//! Row extraction.
//!
//! Column names are positional: cell *j* of a body row is stored under
//! `columns[j]`. Header text is never consulted here.
//!
//! Key behaviors:
//! - Body rows are the `tr` children of the table's `tbody` elements, or its
//!   direct `tr` children when there is no `tbody`. Every such row is kept;
//!   header rows written with `td` cells are left for the caller to filter.
//! - Both `th` and `td` cells take a position. A row with no `td` cell is a
//!   header or spacer and is dropped, as is a row with no cells at all.
//! - Cells beyond the column list are discarded; short rows lack keys.
//! - Cell text is trimmed with internal whitespace runs collapsed.

use scraper::ElementRef;

use crate::row::Row;

/// Collapses runs of whitespace into single spaces and trims the ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the normalized text content of a cell.
pub fn cell_text(cell: ElementRef<'_>) -> String {
    let text: String = cell.text().collect();
    normalize_whitespace(&text)
}

/// Direct element children of `el` with the given tag name.
pub(crate) fn child_elements<'a>(
    el: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == name)
}

/// Returns the body rows of a table in document order.
pub fn body_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let bodies: Vec<_> = child_elements(table, "tbody").collect();
    if bodies.is_empty() {
        return child_elements(table, "tr").collect();
    }
    bodies
        .into_iter()
        .flat_map(|body| child_elements(body, "tr"))
        .collect()
}

/// The `th` and `td` children of a row.
pub(crate) fn cell_elements(row: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| matches!(c.value().name(), "th" | "td"))
}

/// Returns the `th` and `td` texts of one row in column order.
pub fn row_cells(row: ElementRef<'_>) -> Vec<String> {
    cell_elements(row).map(cell_text).collect()
}

/// Whether a row carries data, i.e. has at least one `td` cell.
pub fn is_data_row(row: ElementRef<'_>) -> bool {
    cell_elements(row).any(|c| c.value().name() == "td")
}

/// Extracts every body row of `table`, keying cells by position in `columns`.
pub fn extract_rows<S: AsRef<str>>(table: ElementRef<'_>, columns: &[S]) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for tr in body_rows(table) {
        if !is_data_row(tr) {
            dropped += 1;
            continue;
        }
        let row: Row = row_cells(tr)
            .into_iter()
            .zip(columns.iter())
            .map(|(text, column)| (column.as_ref().to_string(), text))
            .collect();

        if row.is_empty() {
            dropped += 1;
            continue;
        }
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), dropped, columns = columns.len(), "extracted rows");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scraper::{Html, Selector};

    fn first_table(doc: &Html) -> ElementRef<'_> {
        let sel = Selector::parse("table").unwrap();
        doc.select(&sel).next().unwrap()
    }

    #[test]
    fn maps_cells_by_position() {
        let doc = Html::parse_document(
            r#"<table>
                <thead><tr><th>Rk</th><th>Team</th></tr></thead>
                <tbody>
                    <tr><td>1</td><td> Duke </td></tr>
                    <tr><td>2</td><td>North
                        Carolina</td></tr>
                </tbody>
            </table>"#,
        );
        let rows = extract_rows(first_table(&doc), &["Rank", "Team"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Rank"), Some("1"));
        assert_eq!(rows[0].get("Team"), Some("Duke"));
        assert_eq!(rows[1].get("Team"), Some("North Carolina"));
    }

    #[test]
    fn short_rows_lack_keys_and_extra_cells_are_dropped() {
        let doc = Html::parse_document(
            r#"<table>
                <thead><tr><th>A</th></tr></thead>
                <tbody>
                    <tr><td>1</td></tr>
                    <tr><td>1</td><td>2</td><td>3</td><td>stray</td></tr>
                </tbody>
            </table>"#,
        );
        let rows = extract_rows(first_table(&doc), &["A", "B", "C"]);
        assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["A"]);
        assert_eq!(rows[1].keys().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(rows[1].get("C"), Some("3"));
    }

    #[test]
    fn tbody_without_thead_keeps_every_row() {
        let doc = Html::parse_document(
            r#"<table><tbody>
                <tr><td>1</td><td>Duke</td></tr>
                <tr><td>2</td><td>UNC</td></tr>
            </tbody></table>"#,
        );
        let rows = extract_rows(first_table(&doc), &["Rk", "Team"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Team"), Some("Duke"));
        assert_eq!(rows[1].get("Team"), Some("UNC"));
    }

    #[test]
    fn th_header_row_without_thead_is_dropped() {
        let doc = Html::parse_document(
            r#"<table>
                <tr><th>Team</th><th>Conf</th></tr>
                <tr><td>Duke</td><td>ACC</td></tr>
            </table>"#,
        );
        let rows = extract_rows(first_table(&doc), &["Team", "Conf"]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Team"), Some("Duke"));
    }

    #[test]
    fn th_cell_in_data_row_keeps_its_position() {
        let doc = Html::parse_document(
            r#"<table>
                <thead><tr><th>Rk</th><th>Team</th></tr></thead>
                <tbody><tr><th>1</th><td>Duke</td></tr></tbody>
            </table>"#,
        );
        let rows = extract_rows(first_table(&doc), &["Rk", "Team"]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Rk"), Some("1"));
        assert_eq!(rows[0].get("Team"), Some("Duke"));
    }

    #[test]
    fn th_and_empty_rows_are_omitted() {
        let doc = Html::parse_document(
            r#"<table>
                <thead><tr><th>Team</th></tr></thead>
                <tbody>
                    <tr><td>Duke</td></tr>
                    <tr><th>Team</th></tr>
                    <tr></tr>
                    <tr><td>Kansas</td></tr>
                </tbody>
            </table>"#,
        );
        let rows = extract_rows(first_table(&doc), &["Team"]);
        let teams: Vec<_> = rows.iter().map(|r| r.get_or_empty("Team")).collect();
        assert_eq!(teams, vec!["Duke", "Kansas"]);
    }

    #[test]
    fn multiple_tbodies_are_concatenated() {
        let doc = Html::parse_document(
            r#"<table>
                <thead><tr><th>Team</th></tr></thead>
                <tbody><tr><td>Duke</td></tr></tbody>
                <tbody><tr><td>Kansas</td></tr></tbody>
            </table>"#,
        );
        let rows = extract_rows(first_table(&doc), &["Team"]);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn nested_table_rows_are_ignored() {
        let doc = Html::parse_document(
            r#"<table>
                <thead><tr><th>Team</th></tr></thead>
                <tbody><tr><td>Duke<table><tr><td>x</td></tr><tr><td>inner</td></tr></table></td></tr></tbody>
            </table>"#,
        );
        let rows = extract_rows(first_table(&doc), &["Team"]);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].get_or_empty("Team").starts_with("Duke"));
    }

    #[test]
    fn normalize_whitespace_collapses() {
        assert_eq!(normalize_whitespace("  a \n\t b  "), "a b");
        assert_eq!(normalize_whitespace("a\u{a0}b"), "a b");
        assert_eq!(normalize_whitespace(""), "");
    }
}
