//! Error types for the catalog crate.
//!
//! Only loading can fail. Once a [`Catalog`](crate::Catalog) exists, every
//! query over it is infallible.

use thiserror::Error;

/// Errors that can occur while loading a movie dataset
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Dataset file could not be found or opened
    #[error("Failed to open dataset: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the dataset
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A non-empty field could not be converted to its numeric type
    ///
    /// `line` is 1-based and counts the header, so it matches what an
    /// editor shows for the offending row.
    #[error("Invalid {field} at line {line}: {value:?} ({reason})")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_message() {
        let err = CatalogError::InvalidField {
            line: 7,
            field: "runtime",
            value: "abc min".to_string(),
            reason: "invalid digit found in string".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Invalid runtime at line 7: \"abc min\" (invalid digit found in string)"
        );
    }
}
