//! Domain types for debt settlement.

use divvy_shared::types::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One member's net balance in a settlement snapshot.
///
/// Positive means the member is owed money, negative means the member owes.
/// Snapshot order is significant: members earlier in the snapshot win ties
/// during settlement, so callers should build snapshots in a stable order
/// (Divvy uses group membership order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberBalance {
    /// The member.
    pub user: UserId,
    /// The member's signed net balance.
    pub balance: Decimal,
}

/// A settlement directive: `debtor` pays `creditor` `amount`.
///
/// The amount is always positive. Directives are advisory; computing a
/// settlement never mutates any balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The member making the payment.
    pub debtor: UserId,
    /// The member receiving the payment.
    pub creditor: UserId,
    /// The payment amount, always positive.
    pub amount: Decimal,
}

/// Sums the balances of a snapshot.
///
/// A settleable snapshot nets to exactly zero; anything else means money
/// entered or left the group without a matching counterparty.
#[must_use]
pub fn net_total(snapshot: &[MemberBalance]) -> Decimal {
    snapshot.iter().map(|entry| entry.balance).sum()
}
