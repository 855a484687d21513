//! Shared application state

use std::path::PathBuf;
use std::sync::Arc;

use crate::search::SearchIndex;

/// State handed to every request handler
pub struct AppState {
    /// The catalogue index, immutable once built
    pub index: Arc<SearchIndex>,

    /// Directory of static front-end files, served for unmatched paths
    pub html_dir: Option<PathBuf>,
}

impl AppState {
    /// Create state serving only the API
    pub fn new(index: Arc<SearchIndex>) -> Self {
        Self {
            index,
            html_dir: None,
        }
    }

    /// Also serve static files from `html_dir`
    pub fn with_html_dir(mut self, html_dir: impl Into<PathBuf>) -> Self {
        self.html_dir = Some(html_dir.into());
        self
    }
}
