//! Error types for the analyzer crate.

use thiserror::Error;

/// Errors raised while interpreting query arguments
///
/// Queries themselves never fail. These errors only surface from the typed
/// criterion parsers; the string-taking query methods turn them into empty
/// results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    /// Ranking criterion name that the query does not support
    #[error("Unknown criterion {name:?} (expected one of: {expected})")]
    UnknownCriterion { name: String, expected: &'static str },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, AnalyzerError>;
