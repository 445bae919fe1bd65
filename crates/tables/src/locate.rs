// ABOUTME: Table locator: finds the Nth element matching a CSS selector in a parsed document.
// ABOUTME: Fails with NotFound or IndexOutOfRange, both reporting how many tables matched.

//! Table location.
//!
//! Key behaviors:
//! - Selectors are plain CSS; the default matches any `<table>`.
//! - An invalid selector matches nothing and reports `NotFound`.
//! - Errors always carry the match count so callers can tell whether the
//!   source layout changed.

use scraper::{ElementRef, Html, Selector};

use crate::error::TableError;

/// Which table to read from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub selector: String,
    pub index: usize,
}

impl TableSpec {
    /// A spec for the first element matching `selector`.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            index: 0,
        }
    }

    /// Select the Nth match instead of the first.
    pub fn index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }
}

impl Default for TableSpec {
    fn default() -> Self {
        Self::new("table")
    }
}

/// Returns every element matching `selector`, in document order.
pub fn locate_tables<'a>(doc: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(selector) {
        Ok(sel) => doc.select(&sel).collect(),
        Err(_) => {
            tracing::debug!(selector, "invalid table selector");
            vec![]
        }
    }
}

/// Counts the elements matching `selector`.
pub fn count_tables(doc: &Html, selector: &str) -> usize {
    locate_tables(doc, selector).len()
}

/// Returns the table picked by `spec`.
pub fn locate_table<'a>(doc: &'a Html, spec: &TableSpec) -> Result<ElementRef<'a>, TableError> {
    let tables = locate_tables(doc, &spec.selector);
    let found = tables.len();
    tracing::debug!(selector = %spec.selector, index = spec.index, found, "locating table");

    if found == 0 {
        return Err(TableError::not_found(&spec.selector, spec.index));
    }
    tables
        .into_iter()
        .nth(spec.index)
        .ok_or_else(|| TableError::index_out_of_range(&spec.selector, spec.index, found))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_TABLES: &str = r#"
        <html><body>
            <table id="first"><tr><td>a</td></tr></table>
            <div><table id="second" class="stats"><tr><td>b</td></tr></table></div>
        </body></html>
    "#;

    #[test]
    fn default_spec_picks_first_table() {
        let doc = Html::parse_document(TWO_TABLES);
        let table = locate_table(&doc, &TableSpec::default()).unwrap();
        assert_eq!(table.value().id(), Some("first"));
    }

    #[test]
    fn index_selects_later_match() {
        let doc = Html::parse_document(TWO_TABLES);
        let table = locate_table(&doc, &TableSpec::new("table").index(1)).unwrap();
        assert_eq!(table.value().id(), Some("second"));
    }

    #[test]
    fn class_selector() {
        let doc = Html::parse_document(TWO_TABLES);
        let table = locate_table(&doc, &TableSpec::new("table.stats")).unwrap();
        assert_eq!(table.value().id(), Some("second"));
    }

    #[test]
    fn missing_table_is_not_found() {
        let doc = Html::parse_document("<html><body><p>nothing</p></body></html>");
        let err = locate_table(&doc, &TableSpec::default()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.found, 0);
    }

    #[test]
    fn index_past_end_reports_count() {
        let doc = Html::parse_document(TWO_TABLES);
        let err = locate_table(&doc, &TableSpec::new("table").index(5)).unwrap_err();
        assert!(err.is_index_out_of_range());
        assert_eq!(err.found, 2);
        assert_eq!(err.index, 5);
    }

    #[test]
    fn invalid_selector_is_not_found() {
        let doc = Html::parse_document(TWO_TABLES);
        let err = locate_table(&doc, &TableSpec::new("[[[invalid")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(count_tables(&doc, "[[[invalid"), 0);
    }
}
