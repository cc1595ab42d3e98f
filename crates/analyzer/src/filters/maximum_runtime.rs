//! Filter to cap runtime.

use super::ABSENT;
use crate::traits::Filter;
use catalog::Movie;

/// Removes movies longer than a limit (in minutes, inclusive).
///
/// A movie without a runtime is compared as `-1`, so it passes any limit of
/// `-1` or more.
pub struct MaximumRuntimeFilter {
    max_runtime: i32,
}

impl MaximumRuntimeFilter {
    pub fn new(max_runtime: i32) -> Self {
        Self { max_runtime }
    }
}

impl Filter for MaximumRuntimeFilter {
    fn name(&self) -> &str {
        "MaximumRuntimeFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.runtime.unwrap_or(ABSENT) <= self.max_runtime
    }
}
