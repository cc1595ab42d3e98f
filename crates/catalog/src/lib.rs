//! # Catalog Crate
//!
//! Loads a movie dataset stored as comma-separated text into an immutable
//! in-memory [`Catalog`].
//!
//! ## Main Components
//!
//! - **record**: quote-aware splitting of one line into raw fields
//! - **schema**: column positions of the dataset
//! - **parser**: coercion of raw fields into a typed [`Movie`]
//! - **index**: catalog construction from files, readers, or lines
//! - **types**: [`Movie`] and [`Catalog`]
//! - **error**: error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/imdb_top_1000.csv"))?;
//! println!("{} movies", catalog.len());
//! ```

// Public modules
pub mod error;
pub mod index;
pub mod parser;
pub mod record;
pub mod schema;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use record::{RawRecord, parse_line};
pub use schema::{FieldLayout, MOVIE_LAYOUT};
pub use types::{Catalog, Movie};
