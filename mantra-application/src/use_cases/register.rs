use mantra_core::{
    Email, Password, PendingRegistration, TokenError, TokenService, UserStore, UserStoreError,
};

use crate::password_hash::compute_password_hash;

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Email Id already has been used.")]
    EmailAlreadyInUse,
    #[error("Failed to hash password: {0}")]
    HashingError(String),
    #[error("{0}")]
    TokenError(#[from] TokenError),
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

/// Register use case - first stage of signup.
///
/// Hashes the password and folds the whole registration into an activation
/// token. No user record is written here: an abandoned signup leaves nothing
/// behind, and the store only learns about the user at activation.
pub struct RegisterUseCase<'a, U, T>
where
    U: UserStore,
    T: TokenService,
{
    user_store: &'a U,
    token_service: &'a T,
}

impl<'a, U, T> RegisterUseCase<'a, U, T>
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

    /// Returns the activation token to be delivered out-of-band.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        first_name: String,
        email: Email,
        password: Password,
    ) -> Result<String, RegisterError> {
        match self.user_store.find_by_email(&email).await {
            Ok(_) => return Err(RegisterError::EmailAlreadyInUse),
            Err(UserStoreError::UserNotFound) => {}
            Err(e) => return Err(RegisterError::UserStoreError(e)),
        }

        let password_hash = compute_password_hash(password)
            .await
            .map_err(RegisterError::HashingError)?;

        let registration = PendingRegistration {
            first_name,
            email,
            password_hash,
        };

        Ok(self.token_service.issue_activation(&registration)?)
    }
}
