//! Request types for group management and expense recording.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::UserId;

/// Create group request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroupRequest {
    /// Group name.
    pub name: String,
    /// Phone numbers of the members. Every phone must belong to a
    /// registered user; membership is stored as resolved user IDs.
    pub members: Vec<String>,
}

/// Add expense request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct AddExpenseRequest {
    /// The member who paid the bill.
    pub payer: UserId,
    /// Total amount paid.
    pub amount: Decimal,
    /// Human-readable description ("Hotel Booking").
    pub description: String,
    /// Members the expense is split between, in split order.
    pub participants: Vec<UserId>,
}
