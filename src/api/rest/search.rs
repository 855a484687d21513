//! Search and autocomplete endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::ApiError;
use crate::api::jsonp;
use crate::api::state::AppState;

/// Query parameters for `/q`
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Full word to search records for
    #[serde(default)]
    pub query: Option<String>,
    /// Partial word to autocomplete
    #[serde(default)]
    pub prefix: Option<String>,
    /// JSONP callback for autocomplete responses
    #[serde(default)]
    pub callback: Option<String>,
}

/// One autocomplete suggestion
#[derive(Debug, Serialize)]
pub struct WordSuggestion {
    #[serde(rename = "Word")]
    pub word: String,
}

/// Lower-cased, trimmed parameter, or `None` when blank
fn normalized(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

/// GET /q - Search records by word, or autocomplete a prefix
///
/// `query` takes precedence when both are given. Neither one is a bad
/// request.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    if let Some(word) = normalized(params.query.as_ref()) {
        let results = state.index.search(&word);
        info!(query = %word, matched = %results.query, hits = results.len(), "search");
        return (StatusCode::OK, Json(results)).into_response();
    }

    if let Some(prefix) = normalized(params.prefix.as_ref()) {
        return autocomplete(&state, &prefix, params.callback.as_deref());
    }

    ApiError::bad_request("One of query parameters 'query' or 'prefix' is required")
        .into_response_with(StatusCode::BAD_REQUEST)
}

fn autocomplete(state: &AppState, prefix: &str, callback: Option<&str>) -> Response {
    let callback = callback.filter(|c| !c.is_empty());
    if let Some(callback) = callback {
        if !jsonp::is_valid_callback(callback) {
            return ApiError::bad_request("Invalid callback name")
                .into_response_with(StatusCode::BAD_REQUEST);
        }
    }

    let words = state.index.prefix_search(prefix);
    debug!(prefix, count = words.len(), "autocomplete");

    let suggestions: Vec<WordSuggestion> = words
        .into_iter()
        .map(|word| WordSuggestion { word })
        .collect();

    match serde_json::to_string(&suggestions) {
        Ok(json) => jsonp::respond(json, callback),
        Err(e) => ApiError::internal(e.to_string())
            .into_response_with(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
