//! User identity - base fields shared by admins and passengers

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

/// Unique user identifier (exact-match key)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a user ID, rejecting blank input
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_input("user ID cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Base identity for all users in the system
///
/// Credentials are stored as provided and compared exactly; there is no
/// hashing or credential policy at this layer.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    password: String,
}

impl User {
    /// Create a user with required identity fields
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let email = email.into();
        let password = password.into();
        if email.trim().is_empty() {
            return Err(Error::invalid_input("email cannot be empty"));
        }
        if password.is_empty() {
            return Err(Error::invalid_input("password cannot be empty"));
        }
        Ok(Self {
            id,
            email,
            password,
        })
    }

    /// Compare the provided credentials against the stored ones
    pub fn authenticate(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// Admin user - full identity with scheduling privileges
///
/// Admins carry no extra state; the privilege split lives in the caller
/// (the console routes admins to registry operations).
#[derive(Debug, Clone)]
pub struct Admin {
    pub user: User,
}

impl Admin {
    pub fn new(user: User) -> Self {
        Self { user }
    }
}
