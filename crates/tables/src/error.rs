// ABOUTME: Error types for table location including ErrorCode enum and TableError struct.
// ABOUTME: Both failure kinds carry the number of tables actually found for diagnostics.

use std::fmt;

/// Error codes representing the two structural failures of table location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotFound,
    IndexOutOfRange,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::NotFound => "no matching table",
            ErrorCode::IndexOutOfRange => "table index out of range",
        };
        write!(f, "{}", s)
    }
}

/// The error returned when the expected table is missing from a document.
///
/// `found` is the number of elements the selector matched. Callers use it to
/// tell a page that changed layout apart from a page that is simply shorter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct TableError {
    pub code: ErrorCode,
    pub selector: String,
    pub index: usize,
    pub found: usize,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tables: select {}[{}]: {} (found {})",
            self.selector, self.index, self.code, self.found
        )
    }
}

impl TableError {
    /// Create a NotFound error.
    pub fn not_found(selector: impl Into<String>, index: usize) -> Self {
        Self {
            code: ErrorCode::NotFound,
            selector: selector.into(),
            index,
            found: 0,
        }
    }

    /// Create an IndexOutOfRange error.
    pub fn index_out_of_range(selector: impl Into<String>, index: usize, found: usize) -> Self {
        Self {
            code: ErrorCode::IndexOutOfRange,
            selector: selector.into(),
            index,
            found,
        }
    }

    /// Returns true if no table matched the selector.
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::NotFound
    }

    /// Returns true if tables matched but fewer than the requested index.
    pub fn is_index_out_of_range(&self) -> bool {
        self.code == ErrorCode::IndexOutOfRange
    }
}
