//! MovieAnalyzer - the query surface over a loaded catalog.
//!
//! Every query is read-only. Criteria arrive as plain strings from callers;
//! an unrecognized criterion is not an error here and simply yields an empty
//! result.

use crate::aggregates::{self, StarPair};
use crate::criteria::{MovieCriterion, StarCriterion};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreFilter, MaximumRuntimeFilter, MinimumRatingFilter};
use crate::rankings;
use catalog::Catalog;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Answers analytical queries over a catalog
///
/// Cloning is cheap: clones share the same catalog.
#[derive(Debug, Clone)]
pub struct MovieAnalyzer {
    /// Shared reference to the catalog (read-only, so no Mutex needed)
    catalog: Arc<Catalog>,
}

impl MovieAnalyzer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Movies per release year, newest first
    pub fn count_by_year(&self) -> Vec<(i32, usize)> {
        aggregates::count_by_year(&self.catalog)
    }

    /// Movies per genre, most common first, ties by genre name
    pub fn count_by_genre(&self) -> Vec<(String, usize)> {
        aggregates::count_by_genre(&self.catalog)
    }

    /// Shared-movie counts for every co-star pair, most frequent first
    pub fn co_star_counts(&self) -> Vec<(StarPair, usize)> {
        aggregates::co_star_counts(&self.catalog)
    }

    /// Top `k` movie names by `"runtime"` or `"overview"`
    ///
    /// Any other criterion yields an empty list.
    pub fn top_movies(&self, k: usize, by: &str) -> Vec<String> {
        match by.parse::<MovieCriterion>() {
            Ok(criterion) => self.top_movies_by(k, criterion),
            Err(e) => {
                debug!("{e}; returning no movies");
                Vec::new()
            }
        }
    }

    pub fn top_movies_by(&self, k: usize, criterion: MovieCriterion) -> Vec<String> {
        rankings::top_movies_by(&self.catalog, k, criterion)
    }

    /// Top `k` star names by mean `"rating"` or `"gross"`
    ///
    /// Any other criterion yields an empty list.
    pub fn top_stars(&self, k: usize, by: &str) -> Vec<String> {
        match by.parse::<StarCriterion>() {
            Ok(criterion) => self.top_stars_by(k, criterion),
            Err(e) => {
                debug!("{e}; returning no stars");
                Vec::new()
            }
        }
    }

    pub fn top_stars_by(&self, k: usize, criterion: StarCriterion) -> Vec<String> {
        rankings::top_stars_by(&self.catalog, k, criterion)
    }

    /// Names of movies in `genre` rated at least `min_rating` and running at
    /// most `max_runtime` minutes, in name order
    ///
    /// Absent ratings and runtimes compare as `-1`; see [`crate::filters`].
    #[instrument(skip(self))]
    pub fn search(&self, genre: &str, min_rating: f32, max_runtime: i32) -> Vec<String> {
        let pipeline = FilterPipeline::new()
            .add_filter(GenreFilter::new(genre))
            .add_filter(MinimumRatingFilter::new(min_rating))
            .add_filter(MaximumRuntimeFilter::new(max_runtime));

        let mut names: Vec<String> = pipeline
            .apply(self.catalog.iter().collect())
            .into_iter()
            .map(|movie| movie.name.clone())
            .collect();
        names.sort();
        names
    }
}

impl From<Catalog> for MovieAnalyzer {
    fn from(catalog: Catalog) -> Self {
        Self::new(Arc::new(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{movie, searchable, strings};
    use catalog::Movie;

    fn analyzer() -> MovieAnalyzer {
        let catalog: Catalog = vec![
            Movie {
                stars: strings(&["Tim Robbins", "Morgan Freeman"]),
                ..searchable("The Shawshank Redemption", &["Drama"], Some(9.3), Some(142))
            },
            searchable("Amadeus", &["Biography", "Drama", "History"], Some(8.3), Some(160)),
            searchable("Unknown Length", &["Drama"], Some(7.5), None),
            searchable("Unrated", &["Drama"], None, Some(100)),
            movie("Blank"),
        ]
        .into_iter()
        .collect();
        MovieAnalyzer::from(catalog)
    }

    #[test]
    fn test_unknown_criteria_are_empty() {
        let analyzer = analyzer();
        assert!(analyzer.top_movies(5, "gross").is_empty());
        assert!(analyzer.top_movies(5, "").is_empty());
        assert!(analyzer.top_stars(5, "runtime").is_empty());
    }

    #[test]
    fn test_known_criteria_delegate() {
        let analyzer = analyzer();
        assert_eq!(
            analyzer.top_movies(1, "runtime"),
            analyzer.top_movies_by(1, MovieCriterion::Runtime)
        );
        assert_eq!(analyzer.top_movies(1, "runtime"), vec!["Amadeus"]);
        assert_eq!(analyzer.top_stars(1, "rating"), vec!["Morgan Freeman"]);
    }

    #[test]
    fn test_search_sorts_by_name() {
        let analyzer = analyzer();
        let found = analyzer.search("Drama", 8.0, 200);
        assert_eq!(found, vec!["Amadeus", "The Shawshank Redemption"]);
    }

    #[test]
    fn test_search_lets_absent_runtime_through() {
        let analyzer = analyzer();
        let found = analyzer.search("Drama", 7.0, 150);
        assert_eq!(found, vec!["The Shawshank Redemption", "Unknown Length"]);
    }

    #[test]
    fn test_search_blank_genre() {
        let analyzer = analyzer();
        assert_eq!(analyzer.search("", -1.0, 0), vec!["Blank"]);
        assert!(analyzer.search("Western", 0.0, 500).is_empty());
    }

    #[test]
    fn test_clones_share_catalog() {
        let analyzer = analyzer();
        let clone = analyzer.clone();
        assert!(std::ptr::eq(analyzer.catalog(), clone.catalog()));
    }
}
