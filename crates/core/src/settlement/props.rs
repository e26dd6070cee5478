//! Property-based tests for the settlement engine.

use std::collections::HashMap;

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use divvy_shared::types::UserId;

use super::engine::settle;
use super::error::SettlementError;
use super::types::{MemberBalance, Transaction};

fn user(n: usize) -> UserId {
    UserId::from_uuid(Uuid::from_u128(n as u128 + 1))
}

/// Strategy to generate snapshots whose balances net to exactly zero:
/// the last member absorbs the residual of the randomly drawn ones.
fn balanced_snapshot() -> impl Strategy<Value = Vec<MemberBalance>> {
    (2usize..10).prop_flat_map(|n| {
        proptest::collection::vec(-1_000_000i64..1_000_000i64, n - 1).prop_map(move |cents| {
            let mut entries: Vec<MemberBalance> = cents
                .iter()
                .enumerate()
                .map(|(i, &c)| MemberBalance {
                    user: user(i),
                    balance: Decimal::new(c, 2),
                })
                .collect();
            let residual: Decimal = entries.iter().map(|e| e.balance).sum();
            entries.push(MemberBalance {
                user: user(n - 1),
                balance: -residual,
            });
            entries
        })
    })
}

fn apply(snapshot: &[MemberBalance], transactions: &[Transaction]) -> HashMap<UserId, Decimal> {
    let mut balances: HashMap<UserId, Decimal> =
        snapshot.iter().map(|e| (e.user, e.balance)).collect();
    for tx in transactions {
        *balances.get_mut(&tx.debtor).unwrap() += tx.amount;
        *balances.get_mut(&tx.creditor).unwrap() -= tx.amount;
    }
    balances
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Completeness: the plan settles everyone
    // =========================================================================

    /// Applying the produced transactions leaves every member at exactly
    /// zero. No residue, no overshoot.
    #[test]
    fn prop_settlement_zeroes_every_balance(snapshot in balanced_snapshot()) {
        let transactions = settle(&snapshot).unwrap();
        let after = apply(&snapshot, &transactions);
        for (member, balance) in after {
            prop_assert!(balance.is_zero(), "member {member} left with {balance}");
        }
    }

    // =========================================================================
    // Shape of the plan
    // =========================================================================

    /// Every transaction moves a positive amount between two distinct
    /// members, from someone who owed to someone who was owed.
    #[test]
    fn prop_transactions_flow_from_debtors_to_creditors(snapshot in balanced_snapshot()) {
        let transactions = settle(&snapshot).unwrap();
        let original: HashMap<UserId, Decimal> =
            snapshot.iter().map(|e| (e.user, e.balance)).collect();

        for tx in &transactions {
            prop_assert!(tx.amount > Decimal::ZERO);
            prop_assert_ne!(tx.debtor, tx.creditor);
            prop_assert!(original[&tx.debtor] < Decimal::ZERO);
            prop_assert!(original[&tx.creditor] > Decimal::ZERO);
        }
    }

    /// The plan never needs more transfers than participants with a
    /// non-zero balance, minus one.
    #[test]
    fn prop_transaction_count_bounded(snapshot in balanced_snapshot()) {
        let transactions = settle(&snapshot).unwrap();
        let involved = snapshot.iter().filter(|e| !e.balance.is_zero()).count();
        if involved == 0 {
            prop_assert!(transactions.is_empty());
        } else {
            prop_assert!(transactions.len() <= involved - 1);
        }
    }

    // =========================================================================
    // Determinism
    // =========================================================================

    /// The same snapshot always produces the same plan.
    #[test]
    fn prop_settlement_is_deterministic(snapshot in balanced_snapshot()) {
        let first = settle(&snapshot).unwrap();
        let second = settle(&snapshot).unwrap();
        prop_assert_eq!(first, second);
    }

    // =========================================================================
    // Rejection of bad input
    // =========================================================================

    /// Perturbing one balance of a settled snapshot by any non-zero amount
    /// makes settlement fail with the residual, producing no transactions.
    #[test]
    fn prop_unbalanced_snapshot_rejected(
        snapshot in balanced_snapshot(),
        perturbation in (-10_000i64..10_000i64).prop_filter("non-zero", |p| *p != 0),
    ) {
        let mut snapshot = snapshot;
        let bump = Decimal::new(perturbation, 2);
        snapshot[0].balance += bump;

        let result = settle(&snapshot);
        prop_assert_eq!(result, Err(SettlementError::UnbalancedLedger { net: bump }));
    }
}
