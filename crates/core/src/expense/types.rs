//! Domain types for expense recording.

use divvy_shared::types::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input for recording a shared expense.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewExpense {
    /// The member who paid the bill.
    pub payer: UserId,
    /// Total amount paid. Must be positive and representable in whole cents.
    pub amount: Decimal,
    /// Human-readable description.
    pub description: String,
    /// Members the expense is split between, in split order. The payer may
    /// or may not be among them.
    pub participants: Vec<UserId>,
}

/// One participant's slice of a split bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpenseShare {
    /// The participant owing this slice.
    pub participant: UserId,
    /// The slice amount. Zero when the bill is too small to reach this
    /// participant's cent.
    pub share: Decimal,
}

/// A signed net-balance adjustment for one user.
///
/// Positive means the user is owed more after the expense, negative means
/// the user owes more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalanceChange {
    /// The user whose balance moves.
    pub user: UserId,
    /// The signed adjustment.
    pub delta: Decimal,
}

/// A validated expense, ready to be applied to the ledger.
///
/// `deltas` always sum to exactly zero: every cent a participant is debited
/// is credited to the payer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpensePosting {
    /// The member who paid.
    pub payer: UserId,
    /// Total amount paid.
    pub amount: Decimal,
    /// Description, trimmed.
    pub description: String,
    /// Per-participant slices, in participant order.
    pub shares: Vec<ExpenseShare>,
    /// Balance adjustments: one per debited participant, then the payer's
    /// credit. Empty when nobody other than the payer owes anything.
    pub deltas: Vec<BalanceChange>,
}

impl ExpensePosting {
    /// Sum of all balance adjustments. Zero for any posting produced by
    /// [`crate::expense::ExpenseRecorder::prepare`].
    #[must_use]
    pub fn net_delta(&self) -> Decimal {
        self.deltas.iter().map(|change| change.delta).sum()
    }
}
