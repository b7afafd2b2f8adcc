//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The static site is served from disk as the router fallback; the JSON
//! endpoints it calls live under `/api`. Every API response carries the
//! permissive CORS headers the site's cross-origin embeds expect, including
//! error responses, so they are attached per response rather than by a
//! preflight-only layer.

pub mod newsletter;
pub mod tts;

use std::path::Path;

use axum::Router;
use axum::http::header::{self, HeaderName};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{any, get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes without the static fallback.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/newsletter", any(newsletter::subscribe))
        .route("/api/tts/voices", get(tts::voices).options(tts::voices_preflight))
        .route("/api/tts/generate", post(tts::generate).options(tts::generate_preflight))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application: API routes, optional static site, compression, and
/// request tracing.
pub fn app(state: AppState, site_dir: Option<&Path>) -> Router {
    let router = api_routes(state);
    let router = match site_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true)),
        None => router,
    };
    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// RESPONSE HELPERS
// =============================================================================

pub(crate) fn cors_headers(methods: &'static str) -> [(HeaderName, &'static str); 3] {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (header::ACCESS_CONTROL_ALLOW_METHODS, methods),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
    ]
}

/// `{"error": message}` with CORS headers.
pub(crate) fn json_error(status: StatusCode, methods: &'static str, message: impl Into<String>) -> Response {
    (status, cors_headers(methods), Json(serde_json::json!({ "error": message.into() }))).into_response()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
