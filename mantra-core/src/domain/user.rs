use std::fmt;

use secrecy::Secret;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::email::Email;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Email is not valid! Please enter valid email address.")]
    InvalidEmail,
    #[error("{0}")]
    WeakPassword(&'static str),
    #[error("Unknown user status: {0}")]
    UnknownStatus(String),
}

/// Unique user identifier, generated at activation time (never at
/// registration - an abandoned signup leaves no record).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Deleted,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Deleted => "deleted",
        }
    }

    pub fn parse(value: &str) -> Result<Self, UserError> {
        match value {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            "deleted" => Ok(UserStatus::Deleted),
            other => Err(UserError::UnknownStatus(other.to_owned())),
        }
    }
}

/// The persisted user record, as the auth core sees it.
///
/// Profile fields the storefront keeps on the same document (address,
/// points, seller flags) are pass-through payload and not modeled here.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    first_name: String,
    email: Email,
    password_hash: Secret<String>,
    status: UserStatus,
}

impl User {
    /// A freshly activated user.
    pub fn new(id: UserId, first_name: String, email: Email, password_hash: Secret<String>) -> Self {
        Self {
            id,
            first_name,
            email,
            password_hash,
            status: UserStatus::Active,
        }
    }

    /// Reconstruct a user from a stored document.
    pub fn parse(
        id: UserId,
        first_name: String,
        email: Email,
        password_hash: Secret<String>,
        status: UserStatus,
    ) -> Self {
        Self {
            id,
            first_name,
            email,
            password_hash,
            status,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &Secret<String> {
        &self.password_hash
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }
}

/// Projection of a user down to id/name/email, for paths that must not
/// load the password hash.
#[derive(Debug, Clone)]
pub struct UserSummary {
    pub id: UserId,
    pub first_name: String,
    pub email: Email,
}
