//! Filter implementations for movie search.
//!
//! This module contains the concrete filters that
//! [`MovieAnalyzer::search`](crate::MovieAnalyzer::search) composes into a
//! FilterPipeline.
//!
//! Absent ratings and runtimes compare as `-1` in these filters. An unrated
//! movie fails any non-negative minimum rating, while a movie with no
//! runtime passes any non-negative runtime cap.

pub mod genre;
pub mod maximum_runtime;
pub mod minimum_rating;

// Re-export for convenience
pub use genre::GenreFilter;
pub use maximum_runtime::MaximumRuntimeFilter;
pub use minimum_rating::MinimumRatingFilter;

/// Value an absent numeric column takes in filter comparisons
///
/// A column that literally holds this value is indistinguishable from a blank
/// one, so the year and runtime queries leave it out as well.
pub(crate) const ABSENT: i32 = -1;
