//! Greedy debt simplification.

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::error::SettlementError;
use super::types::{MemberBalance, Transaction, net_total};

/// Computes the transactions that settle a balance snapshot.
///
/// The snapshot is partitioned into creditors (balance > 0) and debtors
/// (balance < 0); members with a zero balance take no part. Both partitions
/// are sorted by magnitude, largest first, with snapshot order breaking
/// ties. Each round the current debtor pays the current creditor
/// `min(debt, credit)` and whoever reaches exactly zero moves on. Because
/// the balances net to zero, both partitions exhaust together, after at
/// most `creditors + debtors - 1` transactions.
///
/// The computation is deterministic: the same snapshot always yields the
/// same transaction list. Nothing is mutated; applying the directives is
/// the caller's business.
///
/// # Errors
///
/// Returns [`SettlementError::DuplicateUser`] if a user appears twice in
/// the snapshot, and [`SettlementError::UnbalancedLedger`] if the balances
/// do not net to exactly zero. Both checks run before any transaction is
/// produced, so a failed settlement emits nothing.
pub fn settle(snapshot: &[MemberBalance]) -> Result<Vec<Transaction>, SettlementError> {
    let mut seen = HashSet::with_capacity(snapshot.len());
    for entry in snapshot {
        if !seen.insert(entry.user) {
            return Err(SettlementError::DuplicateUser(entry.user));
        }
    }

    let net = net_total(snapshot);
    if net != Decimal::ZERO {
        return Err(SettlementError::UnbalancedLedger { net });
    }

    let mut creditors: Vec<MemberBalance> = snapshot
        .iter()
        .filter(|entry| entry.balance > Decimal::ZERO)
        .copied()
        .collect();
    let mut debtors: Vec<MemberBalance> = snapshot
        .iter()
        .filter(|entry| entry.balance < Decimal::ZERO)
        .copied()
        .collect();

    // Stable sorts, so snapshot order decides ties
    creditors.sort_by(|a, b| b.balance.cmp(&a.balance));
    debtors.sort_by(|a, b| a.balance.cmp(&b.balance));

    let mut transactions = Vec::new();
    let mut i = 0;
    let mut j = 0;
    while i < debtors.len() && j < creditors.len() {
        let settled = creditors[j].balance.min(-debtors[i].balance);
        transactions.push(Transaction {
            debtor: debtors[i].user,
            creditor: creditors[j].user,
            amount: settled,
        });

        debtors[i].balance += settled;
        creditors[j].balance -= settled;

        if debtors[i].balance == Decimal::ZERO {
            i += 1;
        }
        if creditors[j].balance == Decimal::ZERO {
            j += 1;
        }
    }

    Ok(transactions)
}
