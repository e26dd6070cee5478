//! Error types for settlement.

use divvy_shared::types::UserId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while computing a settlement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettlementError {
    /// The snapshot's balances do not net to zero, so no transaction set
    /// can settle it. Carries the residual.
    #[error("Balances do not net to zero (residual {net}); the group cannot be settled in isolation")]
    UnbalancedLedger {
        /// Sum of all balances in the snapshot.
        net: Decimal,
    },

    /// The same user appears more than once in the snapshot.
    #[error("User {0} appears more than once in the balance snapshot")]
    DuplicateUser(UserId),
}

impl SettlementError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnbalancedLedger { .. } => "UNBALANCED_LEDGER",
            Self::DuplicateUser(_) => "DUPLICATE_USER",
        }
    }
}
