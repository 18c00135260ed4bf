use thiserror::Error;

use super::book::Book;
use super::media::MediaError;

const TITLE_PREFIX: &str = "Title: ";
const AUTHOR_PREFIX: &str = "Author: ";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Missing `{0}` header line")]
    MissingHeader(&'static str),
    #[error(transparent)]
    Media(#[from] MediaError),
}

/// Parse a book source: a `Title: ` line, an `Author: ` line, then content.
///
/// Everything after the author line is content, including blank lines.
pub fn parse_book(source: &str) -> Result<Book, ParseError> {
    let mut lines = source.splitn(3, '\n');

    let title = header(lines.next(), TITLE_PREFIX)?;
    let author = header(lines.next(), AUTHOR_PREFIX)?;
    let content = lines.next().unwrap_or("");

    Ok(Book::new(title, vec![author.to_string()], content)?)
}

fn header<'a>(line: Option<&'a str>, prefix: &'static str) -> Result<&'a str, ParseError> {
    line.map(|l| l.trim_end_matches('\r'))
        .and_then(|l| l.strip_prefix(prefix))
        .ok_or(ParseError::MissingHeader(prefix.trim_end()))
}
