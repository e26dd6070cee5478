//! Debt settlement logic.
//!
//! Takes a snapshot of member balances and produces a small set of
//! transactions that zeroes every balance. The algorithm is greedy: the
//! largest debtor repeatedly pays the largest creditor, so the whole group
//! settles in at most `members - 1` transfers.

pub mod engine;
pub mod error;
pub mod types;

#[cfg(test)]
mod props;

pub use engine::settle;
pub use error::SettlementError;
pub use types::{MemberBalance, Transaction, net_total};
