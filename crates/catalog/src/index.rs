//! Catalog construction.
//!
//! Loading is a single sequential pass: read lines, drop the header, split
//! each line with [`parse_line`], convert with [`movie_from_record`]. The
//! first bad numeric field aborts the whole load.

use crate::error::{CatalogError, Result};
use crate::parser::movie_from_record;
use crate::record::{RawRecord, parse_line};
use crate::types::*;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::{debug, info, instrument};

impl Catalog {
    /// Load a dataset file
    ///
    /// The first line is a header and is skipped.
    #[instrument]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CatalogError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => CatalogError::IoError(e),
        })?;

        let catalog = Self::from_reader(BufReader::new(file))?;
        info!("Loaded {} movies from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Load a dataset from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Self::from_lines(lines)
    }

    /// Build a catalog from dataset lines, header first
    ///
    /// Blank lines are skipped. Errors report the 1-based line number.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut movies = Vec::new();

        for (idx, line) in lines.into_iter().enumerate().skip(1) {
            let line = line.as_ref();
            if line.is_empty() {
                continue;
            }
            let record = parse_line(line);
            movies.push(movie_from_record(&record, idx + 1)?);
        }

        debug!("Built catalog with {} movies", movies.len());
        Ok(Self { movies })
    }

    /// Build a catalog from records that were already split
    ///
    /// The header must not be included.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let movies = records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| movie_from_record(&record, idx + 2))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { movies })
    }
}

impl FromIterator<Movie> for Catalog {
    fn from_iter<T: IntoIterator<Item = Movie>>(iter: T) -> Self {
        Self {
            movies: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "Poster_Link,Series_Title,Released_Year,Certificate,Runtime,Genre,IMDB_Rating,Overview,Meta_score,Director,Star1,Star2,Star3,Star4,No_of_Votes,Gross";

    fn dataset(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn test_header_only() {
        let catalog = Catalog::from_reader(Cursor::new(HEADER)).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let catalog = Catalog::from_reader(Cursor::new("")).unwrap();
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_quoted_rows() {
        let text = dataset(&[
            r#"p,"Crouching Tiger, Hidden Dragon",2000,U,120 min,"Action, Adventure, Drama",7.9,"Wuxia, romance and swords.",94,Ang Lee,Chow Yun-Fat,Michelle Yeoh,Ziyi Zhang,Chen Chang,253228,"128,078,872""#,
            "p,Solo,1999,,90 min,Drama,7.0,Short.,,Someone,A,,,,1000,",
        ]);
        let catalog = Catalog::from_reader(Cursor::new(text)).unwrap();
        assert_eq!(catalog.len(), 2);

        let first = &catalog.movies()[0];
        assert_eq!(first.name, "Crouching Tiger, Hidden Dragon");
        assert_eq!(first.genre, vec!["Action", "Adventure", "Drama"]);
        assert_eq!(first.overview, "Wuxia, romance and swords.");
        assert_eq!(first.gross, Some(128_078_872));

        let second = &catalog.movies()[1];
        assert_eq!(second.certificate, "");
        assert_eq!(second.score, None);
        assert_eq!(second.stars, vec!["A"]);
        assert_eq!(second.gross, None);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let text = format!("{HEADER}\n\np,Solo,1999,,90 min,Drama,7.0,,,,,,,,,\n");
        let catalog = Catalog::from_reader(Cursor::new(text)).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_bad_number_aborts_load() {
        let text = dataset(&[
            "p,Good,1999,,90 min,Drama,7.0,,,,,,,,,",
            "p,Bad,1999,,90 min,Drama,seven,,,,,,,,,",
        ]);
        let err = Catalog::from_reader(Cursor::new(text)).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidField { line: 3, field: "rating", .. }
        ));
    }

    #[test]
    fn test_from_records() {
        let records = vec![parse_line("p,Solo,1999,,90 min,Drama,7.0,,,,,,,,,")];
        let catalog = Catalog::from_records(records).unwrap();
        assert_eq!(catalog.movies()[0].runtime, Some(90));
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::load_from_file(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound { .. }));
    }
}
