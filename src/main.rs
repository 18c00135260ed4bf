//! media-search - interactive book search shell.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};

use media_search::catalog::{load_books, Catalog};
use media_search::config::SearchConfig;
use media_search::index::InvertedIndex;
use media_search::logging::init_tracing;
use media_search::shell::Shell;

#[derive(Parser)]
#[command(name = "media-search")]
#[command(about = "Search and rate a directory of books")]
struct Cli {
    /// JSON config file; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory with one book per file
    #[arg(short, long)]
    books: Option<PathBuf>,

    /// Seed for generated ratings
    #[arg(long)]
    seed: Option<u64>,

    /// Start every book unrated
    #[arg(long)]
    no_random_ratings: bool,

    /// Console log level
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level).map_err(|e| anyhow::anyhow!(e))?;

    let mut config = match &cli.config {
        Some(path) => SearchConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SearchConfig::v0(),
    };
    if let Some(books) = cli.books {
        config.book_directory = books;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.no_random_ratings {
        config.random_ratings = false;
    }
    config.validate()?;

    let mut generator = config.rating_generator()?;
    let books = load_books(&config.book_directory, generator.as_mut())?;
    let mut catalog = Catalog::from_media(books)?;

    let index = InvertedIndex::build(&catalog);
    let manifest = index.manifest();
    info!(
        version = manifest.index_version.as_str(),
        postings = manifest.postings,
        "index ready"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut catalog, &index, stdin.lock(), stdout.lock()).run()?;

    Ok(())
}
