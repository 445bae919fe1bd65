// ABOUTME: Library entry point for layout-agnostic HTML table extraction.
// ABOUTME: Re-exports the locator, ordinal row extractor, header synthesizer, Row and TableError.

//! Hoops tables - generic HTML table reading.
//!
//! Turns one table of an HTML document into a list of [`Row`]s. Column names
//! are supplied by the caller (ordinal schemas) or synthesized from the
//! table's own header row. Every value stays text.
//!
//! # Example
//!
//! ```
//! use hoops_tables::{extract_rows, locate_table, Html, TableSpec};
//!
//! let doc = Html::parse_document(
//!     "<table><thead><tr><th>Team</th></tr></thead><tbody><tr><td>Duke</td></tr></tbody></table>",
//! );
//! let table = locate_table(&doc, &TableSpec::default()).unwrap();
//! let rows = extract_rows(table, &["Team"]);
//! assert_eq!(rows[0].get("Team"), Some("Duke"));
//! ```

pub mod error;
pub mod extract;
pub mod headers;
pub mod locate;
pub mod row;

pub use crate::error::{ErrorCode, TableError};
pub use crate::extract::{
    body_rows, cell_text, extract_rows, is_data_row, normalize_whitespace, row_cells,
};
pub use crate::headers::{
    extract_with_headers, header_cells, indexed_headers, ranked_headers, suffix_indexed,
    suffix_ranked,
};
pub use crate::locate::{count_tables, locate_table, locate_tables, TableSpec};
pub use crate::row::Row;
pub use scraper::{ElementRef, Html};
