//! Movie fixtures shared by the unit tests.

use catalog::Movie;

/// A movie with only a name; every other column blank
pub fn movie(name: &str) -> Movie {
    Movie {
        name: name.to_string(),
        released_year: None,
        certificate: String::new(),
        runtime: None,
        genre: vec![String::new()],
        rating: None,
        overview: String::new(),
        score: None,
        director: String::new(),
        stars: Vec::new(),
        vote_num: None,
        gross: None,
    }
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// A movie carrying just the columns search looks at
pub fn searchable(name: &str, genre: &[&str], rating: Option<f32>, runtime: Option<i32>) -> Movie {
    Movie {
        genre: strings(genre),
        rating,
        runtime,
        ..movie(name)
    }
}
