//! Conversion of raw records into [`Movie`] values.
//!
//! Rules per column:
//! - text columns default to `""`
//! - numeric columns are `None` when blank; a non-blank value that does not
//!   parse is an error, never silently coerced
//! - runtime keeps the number before the first space (`"142 min"` -> 142)
//! - gross drops quotes and thousands separators (`"1,234"` -> 1234)
//! - genre is split on `", "`

use crate::error::{CatalogError, Result};
use crate::schema::{GENRE_SEPARATOR, MOVIE_LAYOUT};
use crate::types::Movie;
use std::fmt::Display;
use std::str::FromStr;

/// Build a movie from one parsed record
///
/// `line` is only used for error context. Columns missing from a short record
/// are treated as blank.
pub fn movie_from_record(record: &[String], line: usize) -> Result<Movie> {
    let layout = &MOVIE_LAYOUT;
    let field = |idx: usize| record.get(idx).map(String::as_str).unwrap_or("");

    Ok(Movie {
        name: field(layout.name).to_string(),
        released_year: parse_optional(field(layout.released_year), "released_year", line)?,
        certificate: field(layout.certificate).to_string(),
        runtime: parse_runtime(field(layout.runtime), line)?,
        genre: split_genres(field(layout.genre)),
        rating: parse_optional(field(layout.rating), "rating", line)?,
        overview: field(layout.overview).to_string(),
        score: parse_optional(field(layout.score), "score", line)?,
        director: field(layout.director).to_string(),
        stars: layout
            .stars
            .clone()
            .map(field)
            .filter(|star| !star.is_empty())
            .map(str::to_string)
            .collect(),
        vote_num: parse_optional(field(layout.vote_num), "vote_num", line)?,
        gross: parse_gross(field(layout.gross), line)?,
    })
}

/// Parse a numeric column, blank meaning absent
fn parse_optional<T>(value: &str, field: &'static str, line: usize) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    if value.is_empty() {
        return Ok(None);
    }
    parse_number(value, value, field, line).map(Some)
}

/// Runtime is stored as e.g. `"142 min"`; only the leading number counts
fn parse_runtime(value: &str, line: usize) -> Result<Option<i32>> {
    if value.is_empty() {
        return Ok(None);
    }
    let minutes = value.split(' ').next().unwrap_or_default();
    parse_number(minutes, value, "runtime", line).map(Some)
}

/// Gross is usually quoted with thousands separators, e.g. `"134,966,411"`
fn parse_gross(value: &str, line: usize) -> Result<Option<i64>> {
    if value.is_empty() {
        return Ok(None);
    }
    let digits: String = value.chars().filter(|&c| c != '"' && c != ',').collect();
    parse_number(&digits, value, "gross", line).map(Some)
}

fn parse_number<T>(text: &str, original: &str, field: &'static str, line: usize) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    text.parse().map_err(|e: T::Err| CatalogError::InvalidField {
        line,
        field,
        value: original.to_string(),
        reason: e.to_string(),
    })
}

/// Split the genre column on `", "`
///
/// Trailing empty segments are dropped, except that a column with no
/// separator at all is kept whole. So `""` gives `[""]` while `"Drama, "`
/// gives `["Drama"]`.
fn split_genres(value: &str) -> Vec<String> {
    if !value.contains(GENRE_SEPARATOR) {
        return vec![value.to_string()];
    }
    let mut genres: Vec<String> = value.split(GENRE_SEPARATOR).map(str::to_string).collect();
    while genres.last().is_some_and(|g| g.is_empty()) {
        genres.pop();
    }
    genres
}
