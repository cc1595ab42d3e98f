//! Grouping queries: movies per year, movies per genre, co-star pairs.
//!
//! Each query tallies into an unordered map first and then sorts into a
//! `Vec` with the exact ordering the caller sees.

use crate::filters::ABSENT;
use catalog::Catalog;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Two stars who appeared in the same movie, in name order
///
/// `StarPair::new("B", "A")` and `StarPair::new("A", "B")` are equal, so both
/// billing orders land in one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StarPair {
    first: String,
    second: String,
}

impl StarPair {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    /// The lexicographically smaller name
    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn contains(&self, star: &str) -> bool {
        self.first == star || self.second == star
    }
}

impl fmt::Display for StarPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.first, self.second)
    }
}

/// Number of movies per release year, newest year first
///
/// Movies without a year, blank or `-1`, are not counted.
pub fn count_by_year(catalog: &Catalog) -> Vec<(i32, usize)> {
    let tally = catalog
        .movies()
        .par_iter()
        .filter_map(|movie| movie.released_year)
        .filter(|&year| year != ABSENT)
        .fold(BTreeMap::new, |mut local, year| {
            *local.entry(year).or_insert(0) += 1;
            local
        })
        .reduce(BTreeMap::new, merge_tallies);

    tally.into_iter().rev().collect()
}

/// Number of movies per genre, most common first, ties by genre name
///
/// A movie counts once for each of its genres. A blank genre column shows up
/// as the genre `""`.
pub fn count_by_genre(catalog: &Catalog) -> Vec<(String, usize)> {
    let tally = catalog
        .movies()
        .par_iter()
        .filter(|movie| !movie.genre.is_empty())
        .fold(BTreeMap::new, |mut local, movie| {
            for genre in &movie.genre {
                *local.entry(genre.as_str()).or_insert(0) += 1;
            }
            local
        })
        .reduce(BTreeMap::new, merge_tallies);

    let mut counts: Vec<(String, usize)> = tally
        .into_iter()
        .map(|(genre, count)| (genre.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// How often each pair of stars shared a movie, most frequent first
///
/// Every positional pair `i < j` of a movie's star list counts once. Pairs
/// with equal counts stay in the order they were first seen, so this one is
/// computed sequentially.
pub fn co_star_counts(catalog: &Catalog) -> Vec<(StarPair, usize)> {
    let mut slots: HashMap<StarPair, usize> = HashMap::new();
    let mut counts: Vec<(StarPair, usize)> = Vec::new();

    for movie in catalog.iter().filter(|movie| !movie.stars.is_empty()) {
        for (i, a) in movie.stars.iter().enumerate() {
            for b in &movie.stars[i + 1..] {
                let pair = StarPair::new(a.as_str(), b.as_str());
                match slots.get(&pair) {
                    Some(&slot) => counts[slot].1 += 1,
                    None => {
                        slots.insert(pair.clone(), counts.len());
                        counts.push((pair, 1));
                    }
                }
            }
        }
    }

    // sort_by is stable: equal counts keep first-occurrence order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn merge_tallies<K: Ord>(
    mut left: BTreeMap<K, usize>,
    right: BTreeMap<K, usize>,
) -> BTreeMap<K, usize> {
    for (key, count) in right {
        *left.entry(key).or_insert(0) += count;
    }
    left
}
