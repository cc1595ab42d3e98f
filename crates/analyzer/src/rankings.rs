//! Top-K rankings of movies and stars.
//!
//! Both rankings sort by their criterion descending and break ties by name
//! ascending, so the output is a total order and a smaller K always yields a
//! prefix of a larger K.

use crate::criteria::{MovieCriterion, StarCriterion};
use crate::filters::ABSENT;
use catalog::{Catalog, Movie};
use std::collections::HashMap;
use tracing::debug;

/// Names of the first `k` movies ranked by `criterion`
///
/// Movies without a runtime (blank or `-1`), or with an empty overview, are
/// left out of the respective ranking. Any other runtime is ranked, negative
/// ones included. Overview length is measured in UTF-16 code units, so a
/// character outside the Basic Multilingual Plane counts twice.
pub fn top_movies_by(catalog: &Catalog, k: usize, criterion: MovieCriterion) -> Vec<String> {
    let key = |movie: &Movie| -> Option<i64> {
        match criterion {
            MovieCriterion::Runtime => movie
                .runtime
                .filter(|&minutes| minutes != ABSENT)
                .map(i64::from),
            MovieCriterion::Overview => (!movie.overview.is_empty())
                .then(|| movie.overview.encode_utf16().count() as i64),
        }
    };

    let mut ranked: Vec<(i64, &str)> = catalog
        .iter()
        .filter_map(|movie| key(movie).map(|value| (value, movie.name.as_str())))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));

    debug!("Ranked {} movies by {}", ranked.len(), criterion);
    ranked
        .into_iter()
        .take(k)
        .map(|(_, name)| name.to_string())
        .collect()
}

/// Names of the first `k` stars ranked by the mean of `criterion` over their
/// movies
///
/// Only movies with a value for the criterion contribute, both to the sum
/// and to the count.
pub fn top_stars_by(catalog: &Catalog, k: usize, criterion: StarCriterion) -> Vec<String> {
    let criterion_value = |movie: &Movie| -> Option<f64> {
        match criterion {
            StarCriterion::Rating => movie.rating.map(f64::from),
            StarCriterion::Gross => movie.gross.map(|g| g as f64),
        }
    };

    let mut totals: HashMap<&str, (f64, u32)> = HashMap::new();
    for movie in catalog.iter().filter(|movie| !movie.stars.is_empty()) {
        let Some(value) = criterion_value(movie) else {
            continue;
        };
        for star in &movie.stars {
            let entry = totals.entry(star.as_str()).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }

    let mut ranked: Vec<(&str, f64)> = totals
        .into_iter()
        .map(|(star, (sum, count))| (star, sum / f64::from(count)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    debug!("Ranked {} stars by {}", ranked.len(), criterion);
    ranked
        .into_iter()
        .take(k)
        .map(|(star, _)| star.to_string())
        .collect()
}
