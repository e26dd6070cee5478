//! In-memory ledger state and the shared store handle.
//!
//! All records live in a single [`LedgerState`] behind one async `RwLock`.
//! Repositories take whole-state write guards for their mutations, so a
//! registration or an expense posting is atomic: readers never observe a
//! group whose balances are only partially applied.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use divvy_shared::types::{ExpenseId, GroupId, UserId};
use rust_decimal::Decimal;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A registered user.
///
/// `password_hash` is an Argon2 PHC string and must never leave the store
/// layer in API responses.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Phone number, unique across all users.
    pub phone: String,
    /// Argon2 PHC hash of the user's password.
    pub password_hash: String,
    /// Groups this user belongs to, in enrollment order.
    pub groups: Vec<GroupId>,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

/// A group of users that share expenses.
#[derive(Debug, Clone)]
pub struct GroupRecord {
    /// Unique group identifier.
    pub id: GroupId,
    /// Display name.
    pub name: String,
    /// Members in the order they were listed at creation.
    pub members: Vec<UserId>,
    /// Expenses recorded against this group, append-only, oldest first.
    pub expenses: Vec<ExpenseRecord>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A single recorded expense. Immutable once stored.
#[derive(Debug, Clone)]
pub struct ExpenseRecord {
    /// Unique expense identifier.
    pub id: ExpenseId,
    /// Member who paid the bill.
    pub payer: UserId,
    /// Total amount paid.
    pub amount: Decimal,
    /// Trimmed description.
    pub description: String,
    /// Members who consumed the expense, as submitted.
    pub participants: Vec<UserId>,
    /// Posting timestamp.
    pub created_at: DateTime<Utc>,
}

/// The entire ledger: users, groups, and per-user net balances.
///
/// Balances are global per user, not per group. A user who owes in one
/// group and is owed in another carries a single net figure here.
#[derive(Debug, Default)]
pub struct LedgerState {
    /// All registered users by id.
    pub users: HashMap<UserId, UserRecord>,
    /// Phone number uniqueness index, phone to user id.
    pub phone_index: HashMap<String, UserId>,
    /// All groups by id.
    pub groups: HashMap<GroupId, GroupRecord>,
    /// Net balance per user. Positive means the user is owed money.
    pub balances: HashMap<UserId, Decimal>,
}

/// Cheaply cloneable handle to the shared ledger state.
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    inner: Arc<RwLock<LedgerState>>,
}

impl LedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires a shared read guard over the whole ledger.
    pub async fn read(&self) -> RwLockReadGuard<'_, LedgerState> {
        self.inner.read().await
    }

    /// Acquires an exclusive write guard over the whole ledger.
    pub async fn write(&self) -> RwLockWriteGuard<'_, LedgerState> {
        self.inner.write().await
    }
}
