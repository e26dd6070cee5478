//! Demo data seeding for local development.
//!
//! Registers three users, puts them in a group, and records two expenses
//! so the settlement endpoints have something to chew on right away.

use divvy_core::auth::{PasswordError, hash_password};
use divvy_core::expense::NewExpense;
use rust_decimal::Decimal;

use crate::repositories::{GroupError, GroupRepository, UserError, UserRepository};
use crate::state::LedgerStore;

/// Error types for demo seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Password hashing failed.
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// User registration failed.
    #[error(transparent)]
    User(#[from] UserError),

    /// Group creation or expense recording failed.
    #[error(transparent)]
    Group(#[from] GroupError),
}

const ALICE_PHONE: &str = "5550101";
const BOB_PHONE: &str = "5550102";
const CHARLIE_PHONE: &str = "5550103";

/// Seeds the store with a small worked example.
///
/// Idempotent: if the demo users already exist, this is a no-op. After a
/// fresh seed the net balances are Alice +125.00, Bob -25.00, and
/// Charlie -100.00.
///
/// # Errors
///
/// Returns a [`SeedError`] if any registration, group creation, or
/// expense posting fails.
pub async fn seed_demo(store: &LedgerStore) -> Result<(), SeedError> {
    let users = UserRepository::new(store.clone());
    let groups = GroupRepository::new(store.clone());

    if users.phone_exists(ALICE_PHONE).await {
        tracing::info!("demo data already seeded, skipping");
        return Ok(());
    }

    let alice = users
        .register("Alice", ALICE_PHONE, &hash_password("password1")?)
        .await?;
    let bob = users
        .register("Bob", BOB_PHONE, &hash_password("password2")?)
        .await?;
    users
        .register("Charlie", CHARLIE_PHONE, &hash_password("password3")?)
        .await?;

    let trip = groups
        .create(
            "Trip to Goa",
            &[
                ALICE_PHONE.to_string(),
                BOB_PHONE.to_string(),
                CHARLIE_PHONE.to_string(),
            ],
        )
        .await?;

    groups
        .record_expense(
            trip.id,
            &NewExpense {
                payer: alice.id,
                amount: Decimal::new(300_00, 2),
                description: "Hotel Booking".to_string(),
                participants: trip.members.clone(),
            },
        )
        .await?;

    groups
        .record_expense(
            trip.id,
            &NewExpense {
                payer: bob.id,
                amount: Decimal::new(150_00, 2),
                description: "Dinner".to_string(),
                participants: vec![alice.id, bob.id],
            },
        )
        .await?;

    tracing::info!(group_id = %trip.id, "demo data seeded");
    Ok(())
}
