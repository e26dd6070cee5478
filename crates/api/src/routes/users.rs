//! User routes for balance lookup.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use crate::AppState;
use divvy_shared::types::UserId;
use divvy_store::UserRepository;

/// Creates the user router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users/{user_id}/balance", get(get_balance))
}

/// GET /users/{user_id}/balance - The user's net balance across all groups.
///
/// A zero balance is a normal answer for a user with no outstanding
/// debts, not a missing one.
async fn get_balance(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> impl IntoResponse {
    let user_repo = UserRepository::new(state.store.clone());

    match user_repo.balance(user_id).await {
        Ok(balance) => (
            StatusCode::OK,
            Json(json!({
                "user_id": user_id,
                "balance": balance
            })),
        )
            .into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "user_not_found",
                "message": "User not found"
            })),
        )
            .into_response(),
    }
}
