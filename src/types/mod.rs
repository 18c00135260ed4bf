pub mod identifiers;
pub mod listing;

pub use identifiers::{IndexVersion, MediaId};
pub use listing::{ListedMedia, Query, SearchMetadata, SearchResult};
