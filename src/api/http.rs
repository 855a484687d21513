//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::rest::{records, search, stats};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // The autocomplete widget may be embedded on other sites
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Search and autocomplete
        .route("/q", get(search::search))
        // REST API endpoints
        .route("/api/records/:number", get(records::get_record))
        .route("/api/stats", get(stats::get_stats));

    let router = match &state.html_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl+C
pub async fn serve(state: Arc<AppState>, addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(address = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    // If the handler can't be installed, run until killed
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{AliasMap, RecordIndex, SearchIndex};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use tower::util::ServiceExt;

    fn test_state() -> Arc<AppState> {
        let records = RecordIndex::from_reader(
            "1#1#What is the soul?#It is eternal.\\nIt is conscious.#soul,eternal\n\
             1#2#What is dharma?#The nature of a thing.#धर्म\n"
                .as_bytes(),
        )
        .unwrap();
        let aliases =
            AliasMap::from_reader("धर्म,dharma\nआत्मा,soul\nस्रोत,source\n".as_bytes()).unwrap();
        let index = SearchIndex::from_parts(records, aliases);
        Arc::new(AppState::new(Arc::new(index)))
    }

    async fn get(uri: &str) -> Response {
        create_router(test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = get("/health").await;
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_query_lowercases_and_searches() {
        let response = get("/q?query=SOUL").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["Query"], "soul");
        assert_eq!(json["Results"].as_array().unwrap().len(), 1);
        assert_eq!(json["Results"][0]["Number"], 1);
    }

    #[tokio::test]
    async fn test_query_through_alias() {
        let response = get("/q?query=dharma").await;
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["Query"], "धर्म");
        assert_eq!(json["Results"][0]["Number"], 2);
    }

    #[tokio::test]
    async fn test_query_miss_is_ok() {
        let response = get("/q?query=nothing").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["Query"], "nothing");
        assert!(json["Results"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_prefix_json() {
        let response = get("/q?prefix=so").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json; charset=UTF-8"
        );
        assert_eq!(
            body_string(response).await,
            r#"[{"Word":"soul"},{"Word":"source"}]"#
        );
    }

    #[tokio::test]
    async fn test_prefix_jsonp() {
        let response = get("/q?prefix=sou&callback=cb").await;
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/javascript; charset=UTF-8"
        );
        assert_eq!(
            body_string(response).await,
            r#"cb([{"Word":"soul"},{"Word":"source"}]);"#
        );
    }

    #[tokio::test]
    async fn test_prefix_rejects_bad_callback() {
        let response = get("/q?prefix=so&callback=alert(1)").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_prefix_no_match() {
        let response = get("/q?prefix=zz").await;
        assert_eq!(body_string(response).await, "[]");
    }

    #[tokio::test]
    async fn test_missing_params_is_bad_request() {
        for uri in ["/q", "/q?query=", "/q?prefix=%20"] {
            let response = get(uri).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
            let json: serde_json::Value =
                serde_json::from_str(&body_string(response).await).unwrap();
            assert_eq!(json["code"], "BAD_REQUEST");
        }
    }

    #[tokio::test]
    async fn test_record_endpoint() {
        let response = get("/api/records/1?render=html").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["Answer"], "It is eternal.<br><br>It is conscious.");

        let response = get("/api/records/42").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let response = get("/api/stats").await;
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["recordCount"], 2);
        assert_eq!(json["aliasCount"], 3);
    }
}
