//! User repository for registration and lookup.

use chrono::Utc;
use divvy_shared::types::UserId;
use rust_decimal::Decimal;

use crate::state::{LedgerStore, UserRecord};

/// Error types for user operations.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    /// Phone number is already registered.
    #[error("Phone number '{0}' is already registered")]
    PhoneTaken(String),

    /// User not found.
    #[error("User not found: {0}")]
    NotFound(UserId),
}

impl UserError {
    /// Stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::PhoneTaken(_) => "PHONE_TAKEN",
            Self::NotFound(_) => "USER_NOT_FOUND",
        }
    }
}

/// User repository over the in-memory ledger.
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: LedgerStore,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    /// Registers a new user with a zero starting balance.
    ///
    /// The phone uniqueness check and the insert happen under one write
    /// guard, so two concurrent registrations with the same phone cannot
    /// both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::PhoneTaken`] if the phone number is already
    /// registered.
    pub async fn register(
        &self,
        name: &str,
        phone: &str,
        password_hash: &str,
    ) -> Result<UserRecord, UserError> {
        let mut state = self.store.write().await;

        if state.phone_index.contains_key(phone) {
            return Err(UserError::PhoneTaken(phone.to_string()));
        }

        let user = UserRecord {
            id: UserId::new(),
            name: name.to_string(),
            phone: phone.to_string(),
            password_hash: password_hash.to_string(),
            groups: Vec::new(),
            created_at: Utc::now(),
        };

        state.phone_index.insert(phone.to_string(), user.id);
        state.balances.insert(user.id, Decimal::ZERO);
        state.users.insert(user.id, user.clone());

        Ok(user)
    }

    /// Finds a user by phone number.
    pub async fn find_by_phone(&self, phone: &str) -> Option<UserRecord> {
        let state = self.store.read().await;
        let id = state.phone_index.get(phone)?;
        state.users.get(id).cloned()
    }

    /// Finds a user by ID.
    pub async fn find_by_id(&self, id: UserId) -> Option<UserRecord> {
        let state = self.store.read().await;
        state.users.get(&id).cloned()
    }

    /// Returns whether a phone number is already registered.
    pub async fn phone_exists(&self, phone: &str) -> bool {
        let state = self.store.read().await;
        state.phone_index.contains_key(phone)
    }

    /// Returns the user's current net balance across all groups.
    ///
    /// A user with no recorded expenses has a balance of zero; that is a
    /// valid answer, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] if no such user is registered.
    pub async fn balance(&self, id: UserId) -> Result<Decimal, UserError> {
        let state = self.store.read().await;
        if !state.users.contains_key(&id) {
            return Err(UserError::NotFound(id));
        }
        Ok(state.balances.get(&id).copied().unwrap_or(Decimal::ZERO))
    }
}
