//! Data types for the Q&A catalogue
//!
//! This module contains the records and result shapes shared by the index
//! and the HTTP layer.

mod record;
mod stats;

pub use record::{Record, SearchResult, SearchResults};
pub use stats::IndexStats;

/// Result type for application-level operations
pub type AppResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
