//! Core business logic for Divvy.
//!
//! This crate contains pure business logic with ZERO web or store dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `expense` - Expense validation, even splitting, and balance deltas
//! - `settlement` - Greedy debt simplification over balance snapshots
//! - `auth` - Password hashing

pub mod auth;
pub mod expense;
pub mod settlement;
