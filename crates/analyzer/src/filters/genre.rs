//! Filter to keep only movies tagged with a given genre.

use crate::traits::Filter;
use catalog::Movie;

/// Keeps movies whose genre list contains the genre exactly.
///
/// Matching is case-sensitive and does not trim, so `"Drama"` does not match
/// `"drama"` or `" Drama"`.
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.has_genre(&self.genre)
    }
}
