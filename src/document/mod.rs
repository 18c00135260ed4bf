pub mod book;
pub mod media;
pub mod parser;
pub mod rating;

pub use crate::types::identifiers::MediaId;
pub use book::Book;
pub use media::{compare_media, compare_with_absent, Media, MediaError};
pub use parser::{parse_book, ParseError};
pub use rating::RatingTally;
