//! User model.
//!
//! Accounts are a collaborator of the order pipeline; the engine only needs
//! to resolve customers by id. Authentication lives elsewhere.

use common::UserId;
use serde::{Deserialize, Serialize};

/// Role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    Customer,
    Merchant,
    Admin,
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

impl User {
    /// Creates a user with a fresh id.
    pub fn new(username: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            email: email.into(),
            role,
        }
    }
}
