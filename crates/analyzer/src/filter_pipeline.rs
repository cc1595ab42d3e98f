//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use catalog::Movie;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new("Drama"))
///     .add_filter(MinimumRatingFilter::new(7.0))
///     .add_filter(MaximumRuntimeFilter::new(130));
///
/// let matches = pipeline.apply(catalog.iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence.
    ///
    /// Each filter sees only the movies the previous one kept, and the
    /// relative order of movies is never changed.
    pub fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        let mut current = movies;
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
            if current.is_empty() {
                break;
            }
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{GenreFilter, MaximumRuntimeFilter, MinimumRatingFilter};
    use crate::test_support::searchable as movie;

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let movies = vec![
            movie("A", &["Drama"], Some(7.0), Some(100)),
            movie("B", &["Comedy"], Some(6.0), Some(90)),
        ];

        let filtered = pipeline.apply(movies.iter().collect());
        assert!(pipeline.is_empty());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(GenreFilter::new("Comedy"));
        let movies = vec![
            movie("A", &["Drama"], Some(7.0), Some(100)),
            movie("B", &["Comedy"], Some(6.0), Some(90)),
        ];

        let filtered = pipeline.apply(movies.iter().collect());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "B");
    }

    #[test]
    fn test_chained_filters_keep_order() {
        let pipeline = FilterPipeline::new()
            .add_filter(GenreFilter::new("Drama"))
            .add_filter(MinimumRatingFilter::new(7.0))
            .add_filter(MaximumRuntimeFilter::new(150));
        let movies = vec![
            movie("Zodiac", &["Crime", "Drama"], Some(7.7), Some(157)),
            movie("Moon", &["Drama", "Sci-Fi"], Some(7.8), Some(97)),
            movie("Amelie", &["Comedy", "Romance"], Some(8.3), Some(122)),
            movie("Babel", &["Drama"], Some(7.5), Some(143)),
            movie("Crash", &["Drama"], Some(6.9), Some(112)),
        ];

        let names: Vec<&str> = pipeline
            .apply(movies.iter().collect())
            .into_iter()
            .map(|m| m.name.as_str())
            .collect();

        assert_eq!(pipeline.len(), 3);
        assert_eq!(names, vec!["Moon", "Babel"]);
    }
}
