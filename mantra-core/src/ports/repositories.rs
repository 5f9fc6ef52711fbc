use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{
    email::Email,
    user::{User, UserId, UserSummary},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("Email Id already has been used.")]
    EmailAlreadyInUse,
    #[error("User not found.")]
    UserNotFound,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EmailAlreadyInUse, Self::EmailAlreadyInUse) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Port over the user collection of the document store.
///
/// Uniqueness of `email` is enforced by the store's unique index, not here;
/// `insert_user` surfaces an index rejection as `EmailAlreadyInUse`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_user(&self, user: User) -> Result<(), UserStoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn find_by_id(&self, id: &UserId) -> Result<User, UserStoreError>;
    /// Projected lookup (id, first name, email) for the refresh path.
    async fn find_summary_by_id(&self, id: &UserId) -> Result<UserSummary, UserStoreError>;
    async fn set_password_hash(
        &self,
        id: &UserId,
        password_hash: Secret<String>,
    ) -> Result<(), UserStoreError>;
    /// Soft delete: flips the status to `inactive`, never removes the record.
    async fn mark_inactive(&self, id: &UserId) -> Result<(), UserStoreError>;
}
