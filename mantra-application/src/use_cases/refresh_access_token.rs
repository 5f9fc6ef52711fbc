use mantra_core::{TokenError, TokenService, UserStore, UserStoreError};

#[derive(Debug, thiserror::Error)]
pub enum RefreshAccessTokenError {
    #[error("Invalid user access.")]
    InvalidRefreshToken,
    #[error("User not found.")]
    UserNotFound,
    #[error("{0}")]
    TokenError(TokenError),
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

/// Refresh use case - the only path that mints access tokens.
///
/// Looks the user up through the projected summary (id, name, email); the
/// password hash never loads on this path.
pub struct RefreshAccessTokenUseCase<'a, U, T>
where
    U: UserStore,
    T: TokenService,
{
    user_store: &'a U,
    token_service: &'a T,
}

impl<'a, U, T> RefreshAccessTokenUseCase<'a, U, T>
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

    #[tracing::instrument(name = "RefreshAccessTokenUseCase::execute", skip_all)]
    pub async fn execute(&self, refresh_token: &str) -> Result<String, RefreshAccessTokenError> {
        let user_id = self
            .token_service
            .verify_refresh(refresh_token)
            .map_err(|_| RefreshAccessTokenError::InvalidRefreshToken)?;

        let summary = self
            .user_store
            .find_summary_by_id(&user_id)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => RefreshAccessTokenError::UserNotFound,
                other => RefreshAccessTokenError::UserStoreError(other),
            })?;

        self.token_service
            .issue_access(&summary.id)
            .map_err(RefreshAccessTokenError::TokenError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mantra_core::{Email, PendingRegistration, User, UserId, UserSummary};
    use secrecy::Secret;

    struct MockUserStore {
        known_id: Option<UserId>,
    }

    #[async_trait]
    impl UserStore for MockUserStore {
        async fn insert_user(&self, _user: User) -> Result<(), UserStoreError> {
            unimplemented!()
        }

        async fn find_by_email(&self, _email: &Email) -> Result<User, UserStoreError> {
            unimplemented!()
        }

        async fn find_by_id(&self, _id: &UserId) -> Result<User, UserStoreError> {
            unimplemented!()
        }

        async fn find_summary_by_id(&self, id: &UserId) -> Result<UserSummary, UserStoreError> {
            match &self.known_id {
                Some(known) if known == id => Ok(UserSummary {
                    id: id.clone(),
                    first_name: "Ann".to_owned(),
                    email: Email::try_from(Secret::from("ann@x.com".to_owned())).unwrap(),
                }),
                _ => Err(UserStoreError::UserNotFound),
            }
        }

        async fn set_password_hash(
            &self,
            _id: &UserId,
            _password_hash: Secret<String>,
        ) -> Result<(), UserStoreError> {
            unimplemented!()
        }

        async fn mark_inactive(&self, _id: &UserId) -> Result<(), UserStoreError> {
            unimplemented!()
        }
    }

    struct FakeTokenService {
        refresh_token: String,
        user_id: UserId,
    }

    impl TokenService for FakeTokenService {
        fn issue_activation(
            &self,
            _registration: &PendingRegistration,
        ) -> Result<String, TokenError> {
            unimplemented!()
        }

        fn verify_activation(&self, _token: &str) -> Result<PendingRegistration, TokenError> {
            unimplemented!()
        }

        fn issue_access(&self, user_id: &UserId) -> Result<String, TokenError> {
            Ok(format!("access:{user_id}"))
        }

        fn verify_access(&self, _token: &str) -> Result<UserId, TokenError> {
            unimplemented!()
        }

        fn issue_refresh(&self, _user_id: &UserId) -> Result<String, TokenError> {
            unimplemented!()
        }

        fn verify_refresh(&self, token: &str) -> Result<UserId, TokenError> {
            if token == self.refresh_token {
                Ok(self.user_id.clone())
            } else {
                Err(TokenError::TokenInvalid)
            }
        }
    }

    #[tokio::test]
    async fn valid_refresh_token_yields_access_token() {
        let user_id = UserId::new();
        let user_store = MockUserStore {
            known_id: Some(user_id.clone()),
        };
        let token_service = FakeTokenService {
            refresh_token: "refresh-tok".to_owned(),
            user_id: user_id.clone(),
        };
        let use_case = RefreshAccessTokenUseCase::new(&user_store, &token_service);

        let access = use_case.execute("refresh-tok").await.unwrap();

        assert_eq!(access, format!("access:{user_id}"));
    }

    #[tokio::test]
    async fn tampered_refresh_token_is_rejected_without_minting() {
        let user_id = UserId::new();
        let user_store = MockUserStore {
            known_id: Some(user_id.clone()),
        };
        let token_service = FakeTokenService {
            refresh_token: "refresh-tok".to_owned(),
            user_id,
        };
        let use_case = RefreshAccessTokenUseCase::new(&user_store, &token_service);

        let result = use_case.execute("refresh-tok-tampered").await;

        assert!(matches!(
            result,
            Err(RefreshAccessTokenError::InvalidRefreshToken)
        ));
    }

    #[tokio::test]
    async fn refresh_fails_when_user_is_gone() {
        let user_store = MockUserStore { known_id: None };
        let token_service = FakeTokenService {
            refresh_token: "refresh-tok".to_owned(),
            user_id: UserId::new(),
        };
        let use_case = RefreshAccessTokenUseCase::new(&user_store, &token_service);

        let result = use_case.execute("refresh-tok").await;

        assert!(matches!(result, Err(RefreshAccessTokenError::UserNotFound)));
    }
}
