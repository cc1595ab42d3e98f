use analyzer::{MovieAnalyzer, MovieCriterion, StarCriterion};
use anyhow::{Context, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// movie-analyzer - statistics over a movie dataset
#[derive(Parser)]
#[command(name = "movie-analyzer")]
#[command(about = "Counts, rankings and search over a CSV movie dataset", long_about = None)]
struct Cli {
    /// Path to the dataset CSV (first line is a header)
    #[arg(short, long, default_value = "data/imdb_top_1000.csv")]
    data_path: PathBuf,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Number of movies per release year, newest first
    Years,

    /// Number of movies per genre, most common first
    Genres,

    /// How often pairs of stars appeared together
    CoStars {
        /// Number of pairs to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Longest movies by runtime or overview length
    TopMovies {
        /// Ranking criterion: runtime or overview
        #[arg(long)]
        by: MovieCriterion,

        /// Number of movies to return
        #[arg(short, default_value = "10")]
        k: usize,
    },

    /// Stars with the best mean rating or gross
    TopStars {
        /// Ranking criterion: rating or gross
        #[arg(long)]
        by: StarCriterion,

        /// Number of stars to return
        #[arg(short, default_value = "10")]
        k: usize,
    },

    /// Movies of a genre within rating and runtime bounds
    Search {
        /// Exact genre name, e.g. "Drama"
        #[arg(long)]
        genre: String,

        /// Minimum rating (inclusive)
        #[arg(long, default_value = "0.0")]
        min_rating: f32,

        /// Maximum runtime in minutes (inclusive)
        #[arg(long, default_value = "1000")]
        max_runtime: i32,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Catalog::load_from_file(&cli.data_path).with_context(|| {
        format!("Failed to load movie dataset from {}", cli.data_path.display())
    })?;
    info!("Loaded {} movies in {:?}", catalog.len(), start.elapsed());

    let analyzer = MovieAnalyzer::from(catalog);
    let json = cli.json;

    match cli.command {
        Commands::Years => handle_years(&analyzer, json),
        Commands::Genres => handle_genres(&analyzer, json),
        Commands::CoStars { limit } => handle_co_stars(&analyzer, limit, json),
        Commands::TopMovies { by, k } => {
            let names = analyzer.top_movies_by(k, by);
            print_names(&format!("Top {k} movies by {by}"), &names, json)
        }
        Commands::TopStars { by, k } => {
            let names = analyzer.top_stars_by(k, by);
            print_names(&format!("Top {k} stars by {by}"), &names, json)
        }
        Commands::Search {
            genre,
            min_rating,
            max_runtime,
        } => {
            let names = analyzer.search(&genre, min_rating, max_runtime);
            let title = format!(
                "{genre} movies rated >= {min_rating} running <= {max_runtime} min"
            );
            print_names(&title, &names, json)
        }
    }
}

/// Handle the 'years' command
fn handle_years(analyzer: &MovieAnalyzer, json: bool) -> Result<()> {
    let counts = analyzer.count_by_year();
    if json {
        let rows: Vec<Value> = counts
            .iter()
            .map(|(year, count)| json!({ "year": year, "count": count }))
            .collect();
        return print_json(&rows);
    }

    println!("{}", "Movies per year:".bold().blue());
    for (year, count) in &counts {
        println!("  {} {}", year.to_string().green(), count);
    }
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(analyzer: &MovieAnalyzer, json: bool) -> Result<()> {
    let counts = analyzer.count_by_genre();
    if json {
        let rows: Vec<Value> = counts
            .iter()
            .map(|(genre, count)| json!({ "genre": genre, "count": count }))
            .collect();
        return print_json(&rows);
    }

    println!("{}", "Movies per genre:".bold().blue());
    for (genre, count) in &counts {
        println!("  {:<12} {}", genre.green(), count);
    }
    Ok(())
}

/// Handle the 'co-stars' command
fn handle_co_stars(analyzer: &MovieAnalyzer, limit: usize, json: bool) -> Result<()> {
    let counts = analyzer.co_star_counts();
    let shown = &counts[..limit.min(counts.len())];
    if json {
        let rows: Vec<Value> = shown
            .iter()
            .map(|(pair, count)| json!({ "stars": [pair.first(), pair.second()], "count": count }))
            .collect();
        return print_json(&rows);
    }

    println!(
        "{}",
        format!("Co-star pairs ({} of {}):", shown.len(), counts.len())
            .bold()
            .blue()
    );
    for (pair, count) in shown {
        println!("  {} {}", count.to_string().green(), pair);
    }
    Ok(())
}

/// Helper function to print a ranked list of names
fn print_names(title: &str, names: &[String], json: bool) -> Result<()> {
    if json {
        return print_json(names);
    }

    println!("{}", format!("{title}:").bold().blue());
    if names.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for (rank, name) in names.iter().enumerate() {
        println!("{}. {}", (rank + 1).to_string().green(), name);
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize results")?;
    println!("{text}");
    Ok(())
}
