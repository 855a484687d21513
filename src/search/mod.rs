//! In-memory search over the Q&A catalogue
//!
//! This module provides:
//! - A code-point prefix trie for autocomplete
//! - An inverted index from question words to records
//! - An English → native alias map used as a lookup fallback
//! - `SearchIndex`, the read-only façade over all three

mod aliases;
mod index;
pub mod loader;
mod query;
mod trie;

pub use aliases::AliasMap;
pub use index::RecordIndex;
pub use query::SearchIndex;
pub use trie::{NodeId, Trie};
