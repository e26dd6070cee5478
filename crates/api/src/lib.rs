//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for auth, groups, expenses, and settlement
//! - Application state wiring over the in-memory store

pub mod routes;

use axum::Router;
use divvy_store::LedgerStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared in-memory ledger.
    pub store: LedgerStore,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
