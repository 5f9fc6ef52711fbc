use thiserror::Error;

use crate::domain::{registration::PendingRegistration, user::UserId};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token has expired.")]
    TokenExpired,
    #[error("Invalid token provided.")]
    TokenInvalid,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for TokenError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::TokenExpired, Self::TokenExpired) => true,
            (Self::TokenInvalid, Self::TokenInvalid) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Port for issuing and verifying the three signed token kinds.
///
/// Each kind signs with its own secret and lifetime: activation tokens carry
/// a full pending registration for 3 minutes, access and refresh tokens carry
/// a user id for 15 minutes. Verification is keyed to the issuing kind's
/// secret; a token of one kind never verifies as another.
///
/// Tokens are self-contained and never persisted - expiry is the only
/// invalidation mechanism (there is no revocation list).
pub trait TokenService: Send + Sync {
    fn issue_activation(&self, registration: &PendingRegistration) -> Result<String, TokenError>;
    fn verify_activation(&self, token: &str) -> Result<PendingRegistration, TokenError>;

    fn issue_access(&self, user_id: &UserId) -> Result<String, TokenError>;
    fn verify_access(&self, token: &str) -> Result<UserId, TokenError>;

    fn issue_refresh(&self, user_id: &UserId) -> Result<String, TokenError>;
    fn verify_refresh(&self, token: &str) -> Result<UserId, TokenError>;
}
