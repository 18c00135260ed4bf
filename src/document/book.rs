use std::fmt;

use serde::{Deserialize, Serialize};

use super::media::{Media, MediaError};
use super::rating::RatingTally;

/// A book: title, authors, its words, and the ratings readers gave it.
///
/// Deserializing goes through the same checks as `Book::new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BookRecord", into = "BookRecord")]
pub struct Book {
    title: String,
    authors: Vec<String>,
    content_tokens: Vec<String>,
    ratings: RatingTally,
}

impl Book {
    /// Build a book, splitting `content` into whitespace-delimited tokens.
    ///
    /// Fails with `MediaError::InvalidArgument` if the title is empty or no
    /// author is given.
    pub fn new(
        title: impl Into<String>,
        authors: Vec<String>,
        content: &str,
    ) -> Result<Self, MediaError> {
        let tokens = content.split_whitespace().map(str::to_string).collect();
        Self::from_tokens(title, authors, tokens)
    }

    /// A book with no content at all. Still rateable and listable, never found
    /// by search.
    pub fn without_content(
        title: impl Into<String>,
        authors: Vec<String>,
    ) -> Result<Self, MediaError> {
        Self::from_tokens(title, authors, Vec::new())
    }

    fn from_tokens(
        title: impl Into<String>,
        authors: Vec<String>,
        content_tokens: Vec<String>,
    ) -> Result<Self, MediaError> {
        let title = title.into();
        if title.is_empty() {
            return Err(MediaError::InvalidArgument(
                "title cannot be empty".to_string(),
            ));
        }
        if authors.is_empty() {
            return Err(MediaError::InvalidArgument(
                "authors cannot be empty".to_string(),
            ));
        }

        Ok(Book {
            title,
            authors,
            content_tokens,
            ratings: RatingTally::new(),
        })
    }

    pub fn ratings(&self) -> &RatingTally {
        &self.ratings
    }
}

/// Stored form of a `Book`.
#[derive(Serialize, Deserialize)]
struct BookRecord {
    title: String,
    authors: Vec<String>,
    content_tokens: Vec<String>,
    rating_sum: u64,
    rating_count: u32,
}

impl TryFrom<BookRecord> for Book {
    type Error = MediaError;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        let malformed = record
            .content_tokens
            .iter()
            .any(|t| t.is_empty() || t.contains(char::is_whitespace));
        if malformed {
            return Err(MediaError::InvalidArgument(
                "content tokens must be non-empty and free of whitespace".to_string(),
            ));
        }

        let mut book = Book::from_tokens(record.title, record.authors, record.content_tokens)?;
        book.ratings = RatingTally::from_parts(record.rating_sum, record.rating_count)?;
        Ok(book)
    }
}

impl From<Book> for BookRecord {
    fn from(book: Book) -> Self {
        BookRecord {
            title: book.title,
            authors: book.authors,
            content_tokens: book.content_tokens,
            rating_sum: book.ratings.sum(),
            rating_count: book.ratings.count(),
        }
    }
}

impl Media for Book {
    fn title(&self) -> &str {
        &self.title
    }

    fn contributors(&self) -> &[String] {
        &self.authors
    }

    fn content(&self) -> &[String] {
        &self.content_tokens
    }

    fn add_rating(&mut self, score: i32) -> Result<(), MediaError> {
        self.ratings.record(score)
    }

    fn num_ratings(&self) -> u32 {
        self.ratings.count()
    }

    fn average_rating(&self) -> f64 {
        self.ratings.average()
    }
}

/// `<title> by [<a>, <b>]`, followed by `: <avg> (<n> ratings)` once rated.
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by [{}]", self.title, self.authors.join(", "))?;
        if self.ratings.count() > 0 {
            write!(
                f,
                ": {} ({} ratings)",
                self.ratings.format_average(),
                self.ratings.count()
            )?;
        }
        Ok(())
    }
}
