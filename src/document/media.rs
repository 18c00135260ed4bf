use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Capabilities every searchable, rateable document provides.
///
/// The index and the search engine only see this trait, so new media kinds
/// plug in without touching them. `Display` is the one-line listing form.
pub trait Media: fmt::Display + fmt::Debug {
    fn title(&self) -> &str;

    /// Authors, artists, or whoever made the item. Never empty.
    fn contributors(&self) -> &[String];

    /// Content tokens in document order.
    fn content(&self) -> &[String];

    /// Fails with `MediaError::InvalidArgument` on a negative score.
    fn add_rating(&mut self, score: i32) -> Result<(), MediaError>;

    fn num_ratings(&self) -> u32;

    fn average_rating(&self) -> f64;
}

/// Ranking order over documents, best first:
/// 1. average rating, descending
/// 2. number of ratings, descending
/// 3. title, case-insensitive, ascending
/// 4. number of contributors, ascending
///
/// Distinct documents may still compare `Equal` here; see
/// `Catalog::compare` for the strict order.
pub fn compare_media(a: &dyn Media, b: &dyn Media) -> Ordering {
    // Averages are finite sums over counts, so total_cmp agrees with the numeric order.
    b.average_rating()
        .total_cmp(&a.average_rating())
        .then_with(|| b.num_ratings().cmp(&a.num_ratings()))
        .then_with(|| cmp_titles(a.title(), b.title()))
        .then_with(|| a.contributors().len().cmp(&b.contributors().len()))
}

/// Ranking order against a possibly absent partner. A present document sorts
/// before an absent one.
pub fn compare_with_absent(a: &dyn Media, b: Option<&dyn Media>) -> Ordering {
    match b {
        Some(b) => compare_media(a, b),
        None => Ordering::Less,
    }
}

fn cmp_titles(a: &str, b: &str) -> Ordering {
    let a = a.chars().flat_map(char::to_lowercase);
    let b = b.chars().flat_map(char::to_lowercase);
    a.cmp(b)
}
