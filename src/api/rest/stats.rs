//! Index statistics endpoint

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::api::state::AppState;
use crate::types::IndexStats;

/// GET /api/stats - Sizes of the loaded index
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<IndexStats> {
    Json(state.index.stats())
}
