//! Shared types and configuration for Divvy.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Request/response DTOs for the HTTP surface
//! - Configuration management

pub mod auth;
pub mod config;
pub mod groups;
pub mod types;

pub use config::AppConfig;
