use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::document::{parse_book, Book, Media, MediaError, ParseError};
use crate::ratings::RatingGenerator;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot read book directory {path}: {source}")]
    Directory {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed book {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },
    #[error("Cannot seed ratings for {path}: {source}")]
    Rating { path: PathBuf, source: MediaError },
}

/// Load every regular file in `dir`, or symlink to one, as a book.
///
/// Files are visited in file-name order so that catalog ids are the same
/// from run to run. Each book passes through `ratings` before it is returned.
pub fn load_books(dir: &Path, ratings: &mut dyn RatingGenerator) -> Result<Vec<Book>, LoadError> {
    let dir_err = |source: std::io::Error| LoadError::Directory {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(dir_err)? {
        let path = entry.map_err(dir_err)?.path();
        // Follows symlinks, so a linked book file counts as a file.
        let metadata = fs::metadata(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        if metadata.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut books = Vec::with_capacity(paths.len());
    for path in paths {
        let source = fs::read_to_string(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        let mut book = parse_book(&source).map_err(|source| LoadError::Parse {
            path: path.clone(),
            source,
        })?;

        ratings
            .seed_ratings(&mut book)
            .map_err(|source| LoadError::Rating {
                path: path.clone(),
                source,
            })?;
        debug!(
            path = %path.display(),
            title = book.title(),
            tokens = book.content().len(),
            ratings = book.num_ratings(),
            "loaded book"
        );
        books.push(book);
    }

    info!(dir = %dir.display(), count = books.len(), "book directory loaded");
    Ok(books)
}
