//! Ranking criteria accepted by the top-K queries.
//!
//! Criteria arrive as strings from callers (`"runtime"`, `"gross"`, ...).
//! They are parsed into enums here so the ranking code can match
//! exhaustively.

use crate::error::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How [`top_movies_by`](crate::rankings::top_movies_by) orders movies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovieCriterion {
    /// Longest runtime first
    Runtime,
    /// Longest overview text first
    Overview,
}

/// How [`top_stars_by`](crate::rankings::top_stars_by) orders stars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarCriterion {
    /// Highest mean rating of the star's movies first
    Rating,
    /// Highest mean gross of the star's movies first
    Gross,
}

impl MovieCriterion {
    pub const ALL: [MovieCriterion; 2] = [MovieCriterion::Runtime, MovieCriterion::Overview];

    pub fn as_str(self) -> &'static str {
        match self {
            MovieCriterion::Runtime => "runtime",
            MovieCriterion::Overview => "overview",
        }
    }
}

impl StarCriterion {
    pub const ALL: [StarCriterion; 2] = [StarCriterion::Rating, StarCriterion::Gross];

    pub fn as_str(self) -> &'static str {
        match self {
            StarCriterion::Rating => "rating",
            StarCriterion::Gross => "gross",
        }
    }
}

impl FromStr for MovieCriterion {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "runtime" => Ok(MovieCriterion::Runtime),
            "overview" => Ok(MovieCriterion::Overview),
            _ => Err(AnalyzerError::UnknownCriterion {
                name: s.to_string(),
                expected: "runtime, overview",
            }),
        }
    }
}

impl FromStr for StarCriterion {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rating" => Ok(StarCriterion::Rating),
            "gross" => Ok(StarCriterion::Gross),
            _ => Err(AnalyzerError::UnknownCriterion {
                name: s.to_string(),
                expected: "rating, gross",
            }),
        }
    }
}

impl fmt::Display for MovieCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StarCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
