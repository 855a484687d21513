//! API module for HTTP endpoints
//!
//! This module exposes the search index to the catalogue front-end as JSON
//! (and JSONP for autocomplete), and serves the static front-end files.

pub mod http;
pub mod jsonp;
pub mod rest;
pub mod state;

pub use http::{create_router, serve};
pub use state::AppState;
