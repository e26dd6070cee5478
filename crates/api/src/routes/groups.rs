//! Group routes: creation, expenses, balances, and settlement.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use divvy_core::expense::NewExpense;
use divvy_core::settlement::{SettlementError, settle};
use divvy_shared::groups::{AddExpenseRequest, CreateGroupRequest};
use divvy_shared::types::GroupId;
use divvy_store::{GroupError, GroupRepository};

/// Creates the group router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/groups", post(create_group))
        .route("/groups/{group_id}", get(get_group))
        .route("/groups/{group_id}/expenses", post(add_expense))
        .route("/groups/{group_id}/balances", get(get_balances))
        .route("/groups/{group_id}/settlement", get(get_settlement))
}

/// POST /groups - Create a group from registered member phones.
async fn create_group(
    State(state): State<AppState>,
    Json(payload): Json<CreateGroupRequest>,
) -> impl IntoResponse {
    let group_repo = GroupRepository::new(state.store.clone());

    if payload.name.trim().is_empty() || payload.members.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "missing_fields",
                "message": "Group name and members are required"
            })),
        )
            .into_response();
    }

    let group = match group_repo.create(payload.name.trim(), &payload.members).await {
        Ok(g) => g,
        Err(e @ GroupError::MemberNotRegistered(_)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "member_not_registered",
                    "message": e.to_string()
                })),
            )
                .into_response();
        }
        Err(e @ (GroupError::DuplicateMember(_) | GroupError::NoMembers)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_members",
                    "message": e.to_string()
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to create group");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred while creating the group"
                })),
            )
                .into_response();
        }
    };

    info!(group_id = %group.id, members = group.members.len(), "Group created");

    (
        StatusCode::CREATED,
        Json(json!({
            "group": {
                "id": group.id,
                "name": group.name,
                "members": group.members
            },
            "message": "Group created successfully"
        })),
    )
        .into_response()
}

/// GET /groups/{group_id} - Fetch a group with its expense history.
async fn get_group(
    State(state): State<AppState>,
    Path(group_id): Path<GroupId>,
) -> impl IntoResponse {
    let group_repo = GroupRepository::new(state.store.clone());

    let Some(group) = group_repo.find(group_id).await else {
        return group_not_found();
    };

    let expenses: Vec<_> = group
        .expenses
        .iter()
        .map(|e| {
            json!({
                "id": e.id,
                "payer": e.payer,
                "amount": e.amount,
                "description": e.description,
                "participants": e.participants,
                "created_at": e.created_at
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "group": {
                "id": group.id,
                "name": group.name,
                "members": group.members,
                "expenses": expenses,
                "created_at": group.created_at
            }
        })),
    )
        .into_response()
}

/// POST /groups/{group_id}/expenses - Record a shared expense.
async fn add_expense(
    State(state): State<AppState>,
    Path(group_id): Path<GroupId>,
    Json(payload): Json<AddExpenseRequest>,
) -> impl IntoResponse {
    let group_repo = GroupRepository::new(state.store.clone());

    let input = NewExpense {
        payer: payload.payer,
        amount: payload.amount,
        description: payload.description,
        participants: payload.participants,
    };

    let expense = match group_repo.record_expense(group_id, &input).await {
        Ok(e) => e,
        Err(GroupError::NotFound(_)) => return group_not_found(),
        Err(e @ (GroupError::PayerNotMember(_) | GroupError::ParticipantNotMember(_))) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "not_a_member",
                    "message": e.to_string()
                })),
            )
                .into_response();
        }
        Err(GroupError::Expense(e)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": e.error_code(),
                    "message": e.to_string()
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to record expense");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred while recording the expense"
                })),
            )
                .into_response();
        }
    };

    info!(group_id = %group_id, expense_id = %expense.id, amount = %expense.amount, "Expense recorded");

    (
        StatusCode::CREATED,
        Json(json!({
            "expense": {
                "id": expense.id,
                "payer": expense.payer,
                "amount": expense.amount,
                "description": expense.description,
                "participants": expense.participants
            },
            "message": "Expense added successfully"
        })),
    )
        .into_response()
}

/// GET /groups/{group_id}/balances - Current net balances, in member order.
async fn get_balances(
    State(state): State<AppState>,
    Path(group_id): Path<GroupId>,
) -> impl IntoResponse {
    let group_repo = GroupRepository::new(state.store.clone());

    match group_repo.balance_snapshot(group_id).await {
        Ok(balances) => (
            StatusCode::OK,
            Json(json!({
                "group_id": group_id,
                "balances": balances
            })),
        )
            .into_response(),
        Err(_) => group_not_found(),
    }
}

/// GET /groups/{group_id}/settlement - Compute the minimal settlement plan.
async fn get_settlement(
    State(state): State<AppState>,
    Path(group_id): Path<GroupId>,
) -> impl IntoResponse {
    let group_repo = GroupRepository::new(state.store.clone());

    let snapshot = match group_repo.balance_snapshot(group_id).await {
        Ok(s) => s,
        Err(_) => return group_not_found(),
    };

    match settle(&snapshot) {
        Ok(transactions) => (
            StatusCode::OK,
            Json(json!({
                "group_id": group_id,
                "transactions": transactions,
                "message": "Settlement calculated"
            })),
        )
            .into_response(),
        // Members with debts in other groups leave the snapshot
        // unbalanced; the group cannot settle in isolation
        Err(e @ SettlementError::UnbalancedLedger { .. }) => (
            StatusCode::CONFLICT,
            Json(json!({
                "error": e.error_code(),
                "message": e.to_string()
            })),
        )
            .into_response(),
        Err(e @ SettlementError::DuplicateUser(_)) => {
            error!(error = %e, group_id = %group_id, "Corrupt balance snapshot");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred while calculating the settlement"
                })),
            )
                .into_response()
        }
    }
}

fn group_not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "group_not_found",
            "message": "Group not found"
        })),
    )
        .into_response()
}
