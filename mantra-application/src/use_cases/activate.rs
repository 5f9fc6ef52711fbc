use mantra_core::{TokenError, TokenService, User, UserId, UserStore, UserStoreError};

#[derive(Debug, thiserror::Error)]
pub enum ActivateError {
    #[error("{0}")]
    TokenError(#[from] TokenError),
    #[error("Email Id already has been used.")]
    EmailAlreadyInUse,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

/// Activate use case - second stage of signup.
///
/// Unpacks the pending registration from the activation token, mints the
/// user id and persists the record with status `active`. The store's unique
/// email index is the final arbiter when two registrations raced.
pub struct ActivateUseCase<'a, U, T>
where
    U: UserStore,
    T: TokenService,
{
    user_store: &'a U,
    token_service: &'a T,
}

impl<'a, U, T> ActivateUseCase<'a, U, T>
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

    #[tracing::instrument(name = "ActivateUseCase::execute", skip_all)]
    pub async fn execute(&self, activation_token: &str) -> Result<(), ActivateError> {
        let registration = self.token_service.verify_activation(activation_token)?;

        let user = User::new(
            UserId::new(),
            registration.first_name,
            registration.email,
            registration.password_hash,
        );

        self.user_store.insert_user(user).await.map_err(|e| match e {
            UserStoreError::EmailAlreadyInUse => ActivateError::EmailAlreadyInUse,
            other => ActivateError::UserStoreError(other),
        })
    }
}
