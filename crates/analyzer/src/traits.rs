//! Core traits for the search pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to a set of movies.

use catalog::Movie;

/// A predicate over movies that can be chained in a
/// [`FilterPipeline`](crate::FilterPipeline).
///
/// Filters borrow movies from the catalog and never fail: a movie either
/// passes or it does not.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single movie passes this filter
    fn matches(&self, movie: &Movie) -> bool;

    /// Keep the movies that pass, preserving their order
    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        movies
            .into_iter()
            .filter(|movie| self.matches(movie))
            .collect()
    }
}
