//! Error types for expense validation.

use divvy_shared::types::UserId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while validating an expense.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpenseError {
    /// Expense amount must be positive.
    #[error("Expense amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Expense amount carries sub-cent precision.
    #[error("Expense amount {0} is not representable in whole cents")]
    SubCentAmount(Decimal),

    /// Expense must name at least one participant.
    #[error("Expense must have at least one participant")]
    EmptyParticipants,

    /// The same participant appears more than once.
    #[error("Participant {0} is listed more than once")]
    DuplicateParticipant(UserId),

    /// Expense description is empty.
    #[error("Expense description cannot be empty")]
    EmptyDescription,
}

impl ExpenseError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount(_) => "NON_POSITIVE_AMOUNT",
            Self::SubCentAmount(_) => "SUB_CENT_AMOUNT",
            Self::EmptyParticipants => "EMPTY_PARTICIPANTS",
            Self::DuplicateParticipant(_) => "DUPLICATE_PARTICIPANT",
            Self::EmptyDescription => "EMPTY_DESCRIPTION",
        }
    }
}
