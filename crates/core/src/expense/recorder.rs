//! Expense validation and posting preparation.

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use super::error::ExpenseError;
use super::split::split_evenly;
use super::types::{BalanceChange, ExpensePosting, ExpenseShare, NewExpense};

/// Prepares validated expense postings.
///
/// Pure: validates input and computes shares and balance deltas without
/// touching any shared state. The store applies the result atomically.
pub struct ExpenseRecorder;

impl ExpenseRecorder {
    /// Validates an expense and computes its shares and balance deltas.
    ///
    /// Steps:
    /// 1. Description must be non-empty after trimming
    /// 2. Amount must be positive and representable in whole cents
    /// 3. Participants must be non-empty and free of duplicates
    /// 4. The amount is split evenly across participants, earliest
    ///    participants absorbing any leftover cents
    /// 5. Every participant other than the payer is debited their share;
    ///    the payer is credited the sum of those debits
    ///
    /// The payer's own share (when the payer participates) produces no
    /// transfer, so a payer who is the sole participant yields an empty
    /// delta list. The deltas of a prepared posting sum to exactly zero.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError` if validation fails.
    pub fn prepare(input: &NewExpense) -> Result<ExpensePosting, ExpenseError> {
        let description = input.description.trim();
        if description.is_empty() {
            return Err(ExpenseError::EmptyDescription);
        }

        if input.amount <= Decimal::ZERO {
            return Err(ExpenseError::NonPositiveAmount(input.amount));
        }
        if input
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::ToZero)
            != input.amount
        {
            return Err(ExpenseError::SubCentAmount(input.amount));
        }

        if input.participants.is_empty() {
            return Err(ExpenseError::EmptyParticipants);
        }
        let mut seen = HashSet::with_capacity(input.participants.len());
        for participant in &input.participants {
            if !seen.insert(*participant) {
                return Err(ExpenseError::DuplicateParticipant(*participant));
            }
        }

        let shares: Vec<ExpenseShare> = input
            .participants
            .iter()
            .zip(split_evenly(input.amount, input.participants.len()))
            .map(|(participant, share)| ExpenseShare {
                participant: *participant,
                share,
            })
            .collect();

        let mut deltas = Vec::with_capacity(shares.len());
        let mut owed_to_payer = Decimal::ZERO;
        for entry in &shares {
            if entry.participant == input.payer || entry.share.is_zero() {
                continue;
            }
            deltas.push(BalanceChange {
                user: entry.participant,
                delta: -entry.share,
            });
            owed_to_payer += entry.share;
        }
        if owed_to_payer > Decimal::ZERO {
            deltas.push(BalanceChange {
                user: input.payer,
                delta: owed_to_payer,
            });
        }

        Ok(ExpensePosting {
            payer: input.payer,
            amount: input.amount,
            description: description.to_string(),
            shares,
            deltas,
        })
    }
}
