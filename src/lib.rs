//! Deterministic in-memory search over rateable media.
//!
//! `media-search` builds a token-to-document inverted index over a catalog
//! of books (or any other `Media`), answers multi-term OR queries against
//! it, and ranks results by rating with a strict tie-break cascade. Identical
//! inputs always produce identical listings.

pub mod catalog;
pub mod config;
pub mod document;
pub mod index;
pub mod logging;
pub mod ratings;
pub mod shell;
pub mod types;
