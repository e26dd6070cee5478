//! Expense recording logic.
//!
//! This module implements the pure half of expense recording:
//! - Input validation (amount, participants, description)
//! - Equal splitting with exact cent distribution
//! - Balance deltas that always sum to zero
//!
//! The store applies a prepared [`ExpensePosting`] atomically; nothing in
//! here touches shared state.

pub mod error;
pub mod recorder;
pub mod split;
pub mod types;

#[cfg(test)]
mod props;

pub use error::ExpenseError;
pub use recorder::ExpenseRecorder;
pub use split::split_evenly;
pub use types::{BalanceChange, ExpensePosting, ExpenseShare, NewExpense};
