//! Single record endpoint

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::ApiError;
use crate::api::state::AppState;

/// Query parameters for the record endpoint
#[derive(Debug, Default, Deserialize)]
pub struct RecordParams {
    /// `html` renders answer newlines as paragraph breaks
    #[serde(default)]
    pub render: Option<String>,
}

/// GET /api/records/:number - One record by its sequence number
pub async fn get_record(
    State(state): State<Arc<AppState>>,
    Path(number): Path<u32>,
    Query(params): Query<RecordParams>,
) -> Response {
    let Some(mut record) = state.index.record(number) else {
        return ApiError::not_found(format!("Record '{}' not found", number))
            .into_response_with(StatusCode::NOT_FOUND);
    };

    if params.render.as_deref() == Some("html") {
        record.answer = record.answer_html();
    }
    (StatusCode::OK, Json(record)).into_response()
}
