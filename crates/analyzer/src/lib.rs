//! Aggregation, ranking and search over a movie [`Catalog`](catalog::Catalog).
//!
//! This crate provides:
//! - Grouping queries (movies per year, per genre, co-star pairs)
//! - Top-K rankings of movies and stars
//! - A Filter trait and FilterPipeline used by search
//! - MovieAnalyzer, the facade tying these together
//!
//! ## Example Usage
//! ```ignore
//! use analyzer::MovieAnalyzer;
//! use catalog::Catalog;
//!
//! let catalog = Catalog::load_from_file(path)?;
//! let analyzer = MovieAnalyzer::from(catalog);
//!
//! let per_genre = analyzer.count_by_genre();
//! let longest = analyzer.top_movies(10, "runtime");
//! let dramas = analyzer.search("Drama", 8.0, 150);
//! ```

pub mod aggregates;
pub mod analyzer;
pub mod criteria;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod rankings;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main types
pub use aggregates::StarPair;
pub use analyzer::MovieAnalyzer;
pub use criteria::{MovieCriterion, StarCriterion};
pub use error::{AnalyzerError, Result};
pub use filter_pipeline::FilterPipeline;
pub use traits::Filter;
