//! Property-based tests for expense preparation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use divvy_shared::types::UserId;

use super::recorder::ExpenseRecorder;
use super::types::NewExpense;

/// Strategy to generate positive cent amounts (0.01 to 10,000.00).
fn cent_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a participant count.
fn participant_count() -> impl Strategy<Value = usize> {
    1usize..10
}

fn user(n: u128) -> UserId {
    UserId::from_uuid(Uuid::from_u128(n + 1))
}

fn participants(count: usize) -> Vec<UserId> {
    (0..count).map(|i| user(i as u128)).collect()
}

fn make_expense(amount: Decimal, count: usize, payer_inside: bool) -> NewExpense {
    let members = participants(count);
    let payer = if payer_inside { members[0] } else { user(999) };
    NewExpense {
        payer,
        amount,
        description: "Shared bill".to_string(),
        participants: members,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Splitting: shares always reconstruct the paid amount
    // =========================================================================

    /// Shares are non-negative, one per participant, and sum exactly to the
    /// amount paid regardless of how awkwardly it divides.
    #[test]
    fn prop_shares_reconstruct_amount(
        amount in cent_amount(),
        count in participant_count(),
        payer_inside in any::<bool>(),
    ) {
        let posting = ExpenseRecorder::prepare(&make_expense(amount, count, payer_inside)).unwrap();

        prop_assert_eq!(posting.shares.len(), count);
        for entry in &posting.shares {
            prop_assert!(entry.share >= Decimal::ZERO);
        }
        prop_assert_eq!(posting.shares.iter().map(|s| s.share).sum::<Decimal>(), amount);
    }

    // =========================================================================
    // Deltas: conservation and per-user correctness
    // =========================================================================

    /// The balance deltas of any prepared posting sum to exactly zero.
    #[test]
    fn prop_deltas_conserve_money(
        amount in cent_amount(),
        count in participant_count(),
        payer_inside in any::<bool>(),
    ) {
        let posting = ExpenseRecorder::prepare(&make_expense(amount, count, payer_inside)).unwrap();
        prop_assert_eq!(posting.net_delta(), Decimal::ZERO);
    }

    /// Every debited participant owes exactly their share, and only
    /// non-payer participants with a non-zero share are debited.
    #[test]
    fn prop_each_participant_debited_their_share(
        amount in cent_amount(),
        count in participant_count(),
        payer_inside in any::<bool>(),
    ) {
        let input = make_expense(amount, count, payer_inside);
        let posting = ExpenseRecorder::prepare(&input).unwrap();

        for change in &posting.deltas {
            if change.user == input.payer {
                prop_assert!(change.delta > Decimal::ZERO);
                continue;
            }
            let share = posting
                .shares
                .iter()
                .find(|s| s.participant == change.user)
                .map(|s| s.share)
                .unwrap();
            prop_assert_eq!(change.delta, -share);
            prop_assert!(share > Decimal::ZERO);
        }
    }

    /// A payer who is not a participant is credited the full amount.
    #[test]
    fn prop_outside_payer_credited_full_amount(
        amount in cent_amount(),
        count in participant_count(),
    ) {
        let input = make_expense(amount, count, false);
        let posting = ExpenseRecorder::prepare(&input).unwrap();

        let payer_delta: Decimal = posting
            .deltas
            .iter()
            .filter(|c| c.user == input.payer)
            .map(|c| c.delta)
            .sum();
        prop_assert_eq!(payer_delta, amount);
    }

    // =========================================================================
    // Determinism
    // =========================================================================

    /// Preparing the same input twice yields identical postings.
    #[test]
    fn prop_preparation_is_deterministic(
        amount in cent_amount(),
        count in participant_count(),
        payer_inside in any::<bool>(),
    ) {
        let input = make_expense(amount, count, payer_inside);
        let first = ExpenseRecorder::prepare(&input).unwrap();
        let second = ExpenseRecorder::prepare(&input).unwrap();
        prop_assert_eq!(first, second);
    }
}
