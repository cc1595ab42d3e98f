//! Column layout of the movie dataset.
//!
//! Every data row has the same sixteen columns in the same order. Keeping the
//! positions here means a format change only touches this file.
//!
//! | index | column          |
//! |-------|-----------------|
//! | 0     | poster / id (unused) |
//! | 1     | name            |
//! | 2     | released year   |
//! | 3     | certificate     |
//! | 4     | runtime         |
//! | 5     | genre           |
//! | 6     | rating          |
//! | 7     | overview        |
//! | 8     | score           |
//! | 9     | director        |
//! | 10-13 | stars           |
//! | 14    | vote count      |
//! | 15    | gross           |

use std::ops::Range;

/// Positions of each semantic field within a parsed record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: usize,
    pub released_year: usize,
    pub certificate: usize,
    pub runtime: usize,
    pub genre: usize,
    pub rating: usize,
    pub overview: usize,
    pub score: usize,
    pub director: usize,
    /// Star columns, in billing order
    pub stars: Range<usize>,
    pub vote_num: usize,
    pub gross: usize,
}

impl FieldLayout {
    /// Number of columns a complete record carries
    pub const fn width(&self) -> usize {
        self.gross + 1
    }
}

/// Layout of the movie dataset rows
pub const MOVIE_LAYOUT: FieldLayout = FieldLayout {
    name: 1,
    released_year: 2,
    certificate: 3,
    runtime: 4,
    genre: 5,
    rating: 6,
    overview: 7,
    score: 8,
    director: 9,
    stars: 10..14,
    vote_num: 14,
    gross: 15,
};

/// Separator between genre names inside the genre column
pub const GENRE_SEPARATOR: &str = ", ";
