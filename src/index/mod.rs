pub mod inverted;
pub mod searcher;

pub use inverted::{fold_case, search, IndexManifest, InvertedIndex};
pub use searcher::Searcher;
