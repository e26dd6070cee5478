//! Repository abstractions over the in-memory ledger.
//!
//! Repositories provide a clean interface for ledger operations, hiding
//! the locking discipline from the rest of the application.

pub mod group;
pub mod user;

pub use group::{GroupError, GroupRepository};
pub use user::{UserError, UserRepository};
