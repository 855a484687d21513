//! JSONP wrapping for the autocomplete endpoint

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";
pub const JAVASCRIPT_CONTENT_TYPE: &str = "application/javascript; charset=UTF-8";

/// Whether `name` may be used as a JSONP callback.
///
/// Accepts dotted JavaScript identifiers such as `jQuery123_456` or
/// `app.onWords`.
pub fn is_valid_callback(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
                    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
                }
                _ => false,
            }
        })
}

/// Serialized JSON as a response, wrapped in `callback(...);` when given
pub fn respond(json: String, callback: Option<&str>) -> Response {
    match callback {
        Some(callback) => (
            [(header::CONTENT_TYPE, JAVASCRIPT_CONTENT_TYPE)],
            format!("{}({});", callback, json),
        )
            .into_response(),
        None => ([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], json).into_response(),
    }
}
