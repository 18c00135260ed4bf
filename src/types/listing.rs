use serde::{Deserialize, Serialize};

use crate::document::Media;
use crate::types::identifiers::MediaId;

/// A fully qualified, normalized query.
/// Normalization rules:
/// - Lowercase
/// - Split on whitespace runs
/// - Blank input has no terms
#[derive(Debug, Clone)]
pub struct Query {
    pub raw: String,
    pub terms: Vec<String>,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let terms = raw
            .split_whitespace()
            .map(crate::index::fold_case)
            .collect();

        Self { raw, terms }
    }

    pub fn is_blank(&self) -> bool {
        self.terms.is_empty()
    }
}

/// One document as shown in a listing or a result set.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListedMedia {
    pub id: MediaId,
    pub title: String,
    pub contributors: Vec<String>,
    pub average_rating: f64,
    pub num_ratings: u32,
    pub display: String,
}

impl ListedMedia {
    pub fn from_media(id: MediaId, media: &dyn Media) -> Self {
        Self {
            id,
            title: media.title().to_string(),
            contributors: media.contributors().to_vec(),
            average_rating: media.average_rating(),
            num_ratings: media.num_ratings(),
            display: media.to_string(),
        }
    }
}

/// Metadata describing how a query was resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMetadata {
    pub query: String,
    pub terms: Vec<String>,
    /// Terms that exist as index keys, in query order.
    pub terms_matched: Vec<String>,
    pub documents_indexed: usize,
    pub documents_matched: usize,
}

/// Ranked answer to a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub documents: Vec<ListedMedia>,
    pub search: SearchMetadata,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
