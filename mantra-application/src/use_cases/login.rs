use mantra_core::{Email, TokenError, TokenService, UserStore, UserStoreError};
use secrecy::Secret;

use crate::password_hash::verify_password_hash;

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("User not found.")]
    UserNotFound,
    #[error("Incorrect password.")]
    IncorrectPassword,
    #[error("{0}")]
    TokenError(#[from] TokenError),
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

/// Login use case - verifies credentials and issues a refresh token.
///
/// Deliberately does NOT issue an access token: clients must perform the
/// refresh exchange to obtain one, so session bootstrap always goes through
/// the cookie path.
pub struct LoginUseCase<'a, U, T>
where
    U: UserStore,
    T: TokenService,
{
    user_store: &'a U,
    token_service: &'a T,
}

impl<'a, U, T> LoginUseCase<'a, U, T>
where
    U: UserStore,
    T: TokenService,
{
    pub fn new(user_store: &'a U, token_service: &'a T) -> Self {
        Self {
            user_store,
            token_service,
        }
    }

    /// Returns the refresh token on success; the HTTP layer owns cookie
    /// delivery.
    ///
    /// The candidate password is a raw secret, not a policy-checked
    /// [`mantra_core::Password`]: the strength policy applies when a
    /// password is chosen, and a policy rejection here would tell an
    /// attacker more than "wrong credentials".
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Secret<String>,
    ) -> Result<String, LoginError> {
        let user = self
            .user_store
            .find_by_email(&email)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => LoginError::UserNotFound,
                other => LoginError::UserStoreError(other),
            })?;

        verify_password_hash(user.password_hash().clone(), password)
            .await
            .map_err(|_| LoginError::IncorrectPassword)?;

        Ok(self.token_service.issue_refresh(user.id())?)
    }
}
