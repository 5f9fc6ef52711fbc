use mantra_core::{Email, TokenError, TokenService, UserStore, UserStoreError};

#[derive(Debug, thiserror::Error)]
pub enum ForgotPasswordError {
    #[error("Invalid user request.")]
    UnknownEmail,
    #[error("{0}")]
    TokenError(#[from] TokenError),
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

/// Forgot-password use case.
///
/// Issues an access token scoped to the user and wraps it in a client-facing
/// reset URL. Delivering that URL (email) is an external collaborator's job.
pub struct ForgotPasswordUseCase<'a, U, T>
where
    U: UserStore,
    T: TokenService,
{
    user_store: &'a U,
    token_service: &'a T,
    client_url: &'a str,
}

impl<'a, U, T> ForgotPasswordUseCase<'a, U, T>
where
    U: UserStore,
    T: TokenService,
{
    pub fn new(user_store: &'a U, token_service: &'a T, client_url: &'a str) -> Self {
        Self {
            user_store,
            token_service,
            client_url,
        }
    }

    #[tracing::instrument(name = "ForgotPasswordUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Email) -> Result<String, ForgotPasswordError> {
        let user = self
            .user_store
            .find_by_email(&email)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => ForgotPasswordError::UnknownEmail,
                other => ForgotPasswordError::UserStoreError(other),
            })?;

        let reset_token = self.token_service.issue_access(user.id())?;

        Ok(format!(
            "{}/password-reset/{}",
            self.client_url.trim_end_matches('/'),
            reset_token
        ))
    }
}
