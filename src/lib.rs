//! QA Catalogue
//!
//! Search service for a bilingual (English / Hindi transliteration)
//! question-and-answer catalogue.
//!
//! # Features
//!
//! - **Word search**: all records whose question words contain a word
//! - **Alias fallback**: English words are translated to their native form on a miss
//! - **Autocomplete**: prefix completion over Unicode code points, for both scripts
//! - **Read-only after load**: one `Arc<SearchIndex>` serves concurrent requests lock-free
//!
//! # Modules
//!
//! - `types`: Records and result shapes
//! - `search`: Trie, record index, alias map and the `SearchIndex` façade
//! - `config`: TOML configuration with per-environment tables
//! - `api`: Axum router exposing the index over HTTP
//! - `error`: Load and configuration errors
//!
//! # Example
//!
//! ```no_run
//! use qa_catalogue::SearchIndex;
//!
//! let index = SearchIndex::load("data/JainPraveshika.txt", "data/words_index.txt").unwrap();
//! let results = index.search("soul");
//! for result in &results.results {
//!     println!("{}.{} {}", result.chapter, result.number, result.question);
//! }
//! let words = index.prefix_search("so");
//! println!("{:?}", words);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod search;
pub mod types;

// Re-export commonly used items at crate root
pub use config::Config;
pub use error::{ConfigError, LoadError};
pub use search::{AliasMap, RecordIndex, SearchIndex, Trie};
pub use types::{AppResult, IndexStats, Record, SearchResult, SearchResults};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
