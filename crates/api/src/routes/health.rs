//! Service liveness route.

use axum::{Json, Router, response::IntoResponse, routing::get};
use serde_json::json;

use crate::AppState;

/// GET /health - Reports service status and version.
///
/// Answers regardless of ledger contents; a healthy response means the
/// process is up and routing, nothing more.
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "divvy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Creates the health router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
