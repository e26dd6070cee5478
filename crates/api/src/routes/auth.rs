//! Authentication routes for registration and login.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use divvy_core::auth::{hash_password, verify_password};
use divvy_shared::auth::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
use divvy_store::{UserError, UserRepository};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// POST /auth/register - Register a new user.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse {
    let user_repo = UserRepository::new(state.store.clone());

    // Reject blank fields before touching the store
    if payload.name.trim().is_empty()
        || payload.phone.trim().is_empty()
        || payload.password.is_empty()
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "missing_fields",
                "message": "All fields are required"
            })),
        )
            .into_response();
    }

    // Hash password
    let password_hash = match hash_password(&payload.password) {
        Ok(h) => h,
        Err(e) => {
            error!(error = %e, "Failed to hash password");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred during registration"
                })),
            )
                .into_response();
        }
    };

    // Create user; the repository enforces phone uniqueness atomically
    let user = match user_repo
        .register(payload.name.trim(), payload.phone.trim(), &password_hash)
        .await
    {
        Ok(u) => u,
        Err(UserError::PhoneTaken(_)) => {
            return (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": "phone_taken",
                    "message": "An account with this phone number already exists"
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to register user");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred during registration"
                })),
            )
                .into_response();
        }
    };

    info!(user_id = %user.id, "New user registered");

    (
        StatusCode::CREATED,
        Json(json!({
            "user": {
                "id": user.id,
                "name": user.name,
                "phone": user.phone
            },
            "message": "User registered successfully"
        })),
    )
        .into_response()
}

/// POST /auth/login - Authenticate a user by phone and password.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    let user_repo = UserRepository::new(state.store.clone());

    if payload.phone.trim().is_empty() || payload.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "missing_fields",
                "message": "All fields are required"
            })),
        )
            .into_response();
    }

    // Find user by phone
    let user = match user_repo.find_by_phone(payload.phone.trim()).await {
        Some(u) => u,
        None => {
            info!(phone = %payload.phone, "Login attempt for non-existent user");
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "invalid_credentials",
                    "message": "Invalid phone number or password"
                })),
            )
                .into_response();
        }
    };

    // Verify password
    match verify_password(&payload.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(user_id = %user.id, "Failed login attempt - invalid password");
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "invalid_credentials",
                    "message": "Invalid phone number or password"
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Password verification error");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred during login"
                })),
            )
                .into_response();
        }
    }

    info!(user_id = %user.id, "User logged in successfully");

    let response = LoginResponse {
        user: UserInfo {
            id: user.id,
            name: user.name,
            phone: user.phone,
            groups: user.groups,
        },
    };

    (StatusCode::OK, Json(response)).into_response()
}
