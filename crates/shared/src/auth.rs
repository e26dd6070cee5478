//! Request and response types for registration and login.

use serde::{Deserialize, Serialize};

use crate::types::{GroupId, UserId};

/// Registration request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// User display name.
    pub name: String,
    /// Phone number (the user's contact key, must be unique).
    pub phone: String,
    /// User password.
    pub password: String,
}

/// Login request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Phone number the account was registered with.
    pub phone: String,
    /// User password.
    pub password: String,
}

/// Login response payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Authenticated user info.
    pub user: UserInfo,
}

/// User info returned in auth responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    /// User ID.
    pub id: UserId,
    /// User display name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Groups the user belongs to.
    pub groups: Vec<GroupId>,
}
