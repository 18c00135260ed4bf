use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::Catalog;
use crate::document::Media;
use crate::types::identifiers::{IndexVersion, MediaId};
use crate::types::listing::Query;

/// Normalize a token or query term for lookup.
///
/// Plain Unicode lowercasing; it does not depend on the process locale.
pub fn fold_case(token: &str) -> String {
    token.to_lowercase()
}

/// Folded token -> identities of the documents containing it.
///
/// Built once; ratings can change afterwards without invalidating it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    // BTreeMap keeps full enumeration sorted by token.
    postings: BTreeMap<String, BTreeSet<MediaId>>,
    documents_indexed: usize,
}

impl InvertedIndex {
    pub fn build(catalog: &Catalog) -> Self {
        Self::from_media(catalog.iter())
    }

    /// Index any sequence of identified documents. Empty tokens are skipped.
    pub fn from_media<'a>(media: impl IntoIterator<Item = (MediaId, &'a dyn Media)>) -> Self {
        let mut index = InvertedIndex::default();

        for (id, doc) in media {
            index.documents_indexed += 1;
            for token in doc.content() {
                if token.is_empty() {
                    continue;
                }
                index
                    .postings
                    .entry(fold_case(token))
                    .or_default()
                    .insert(id);
            }
        }

        info!(
            documents = index.documents_indexed,
            tokens = index.postings.len(),
            "inverted index built"
        );
        index
    }

    pub fn documents_indexed(&self) -> usize {
        self.documents_indexed
    }

    pub fn distinct_tokens(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Documents containing `token`, matched case-insensitively.
    pub fn lookup(&self, token: &str) -> Option<&BTreeSet<MediaId>> {
        self.postings.get(&fold_case(token))
    }

    /// All postings in ascending token order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &BTreeSet<MediaId>)> {
        self.postings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Union of the postings of every query term (OR semantics).
    pub fn search(&self, query: &Query) -> BTreeSet<MediaId> {
        let mut hits = BTreeSet::new();
        for term in &query.terms {
            if let Some(ids) = self.postings.get(term) {
                hits.extend(ids.iter().copied());
            }
        }
        hits
    }

    /// Hash of the sorted postings. Two builds over the same documents in the
    /// same order share a version.
    pub fn version(&self) -> IndexVersion {
        let lines: Vec<String> = self
            .entries()
            .map(|(token, ids)| {
                let ids: Vec<String> = ids.iter().map(MediaId::to_string).collect();
                format!("{token}:{}", ids.join(","))
            })
            .collect();
        IndexVersion::from_lines(lines.iter().map(String::as_str))
    }

    pub fn manifest(&self) -> IndexManifest {
        IndexManifest {
            index_version: self.version(),
            documents_indexed: self.documents_indexed,
            distinct_tokens: self.postings.len(),
            postings: self.postings.values().map(BTreeSet::len).sum(),
            built_at: Utc::now(),
        }
    }
}

/// Summary of a built index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexManifest {
    pub index_version: IndexVersion,
    pub documents_indexed: usize,
    pub distinct_tokens: usize,
    /// Total (token, document) pairs.
    pub postings: usize,
    pub built_at: DateTime<Utc>, // informational only
}

/// Search a possibly absent index with raw query text.
///
/// Never fails: an absent index or a blank query yields no hits.
pub fn search(index: Option<&InvertedIndex>, query: &str) -> BTreeSet<MediaId> {
    let query = Query::new(query);
    match index {
        Some(index) if !query.is_blank() => index.search(&query),
        _ => BTreeSet::new(),
    }
}
