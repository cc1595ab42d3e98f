//! Core domain types for the movie dataset.
//!
//! Numeric columns that may be blank are `Option`s: `None` means the value is
//! absent or unusable, and aggregations skip it rather than treating it as
//! zero.

use serde::{Deserialize, Serialize};

// =============================================================================
// Movie
// =============================================================================

/// One row of the dataset after field coercion
///
/// Immutable once built; the catalog only hands out shared references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub name: String,
    pub released_year: Option<i32>,
    pub certificate: String,
    /// Minutes, taken from the numeric prefix of e.g. `"142 min"`
    pub runtime: Option<i32>,
    /// Genre names in dataset order
    ///
    /// A blank genre column yields `[""]`, not an empty list.
    pub genre: Vec<String>,
    pub rating: Option<f32>,
    pub overview: String,
    /// Metascore
    pub score: Option<i32>,
    pub director: String,
    /// Up to four names in billing order, blanks removed
    pub stars: Vec<String>,
    pub vote_num: Option<i64>,
    pub gross: Option<i64>,
}

impl Movie {
    /// Whether `genre` is one of this movie's genres (exact match)
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genre.iter().any(|g| g == genre)
    }
}

// =============================================================================
// Catalog - the loaded dataset
// =============================================================================

/// The in-memory movie collection
///
/// Built once by one of the loaders in [`crate::index`] and never mutated
/// afterwards, so it can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) movies: Vec<Movie>,
}

impl Catalog {
    /// All movies in dataset order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
