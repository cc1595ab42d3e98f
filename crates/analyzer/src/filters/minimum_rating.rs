//! Filter to enforce a minimum rating.

use super::ABSENT;
use crate::traits::Filter;
use catalog::Movie;

/// Removes movies rated below a threshold.
///
/// ## Algorithm
/// For each movie:
/// 1. Take its rating, or `-1` when the rating is absent
/// 2. Keep it if that value is `>= min_rating`
pub struct MinimumRatingFilter {
    min_rating: f32,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Lowest rating that still passes (inclusive)
    pub fn new(min_rating: f32) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.rating.unwrap_or(ABSENT as f32) >= self.min_rating
    }
}
