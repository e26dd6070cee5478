//! In-memory ledger store with repositories.
//!
//! This crate provides:
//! - The shared [`LedgerStore`] state handle
//! - Repository abstractions for users, groups, and expenses
//! - Demo data seeding for local development

pub mod demo;
pub mod repositories;
pub mod state;

pub use repositories::{GroupError, GroupRepository, UserError, UserRepository};
pub use state::{ExpenseRecord, GroupRecord, LedgerState, LedgerStore, UserRecord};
