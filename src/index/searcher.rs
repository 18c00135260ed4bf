use crate::catalog::Catalog;
use crate::index::inverted::InvertedIndex;
use crate::types::identifiers::MediaId;
use crate::types::listing::{Query, SearchMetadata, SearchResult};

/// Resolves queries against a catalog and its index.
#[derive(Debug, Clone, Copy)]
pub struct Searcher<'a> {
    catalog: &'a Catalog,
    index: &'a InvertedIndex,
}

impl<'a> Searcher<'a> {
    pub fn new(catalog: &'a Catalog, index: &'a InvertedIndex) -> Self {
        Self { catalog, index }
    }

    pub fn search(&self, query: Query) -> SearchResult {
        // 1. Matching Phase
        let hits = self.index.search(&query);

        // 2. Ordering Phase
        let mut ids: Vec<MediaId> = hits.into_iter().collect();
        self.catalog.sort_ids(&mut ids);

        debug_assert!(ids
            .windows(2)
            .all(|w| self.catalog.compare(w[0], w[1]).is_lt()));

        let terms_matched = query
            .terms
            .iter()
            .filter(|t| self.index.lookup(t).is_some())
            .cloned()
            .collect();

        let documents = self.catalog.list(&ids);
        let search = SearchMetadata {
            query: query.raw,
            terms: query.terms,
            terms_matched,
            documents_indexed: self.index.documents_indexed(),
            documents_matched: documents.len(),
        };

        SearchResult { documents, search }
    }
}
