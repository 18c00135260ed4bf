pub mod catalog;
pub mod loader;

pub use catalog::{Catalog, CatalogError};
pub use loader::{load_books, LoadError};
