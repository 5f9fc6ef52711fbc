use mantra_core::{Password, TokenError, TokenService, UserStore, UserStoreError};

use crate::password_hash::compute_password_hash;

#[derive(Debug, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("{0}")]
    TokenError(#[from] TokenError),
    #[error("User not found.")]
    UserNotFound,
    #[error("Failed to hash password: {0}")]
    HashingError(String),
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

/// Reset-password use case.
///
/// The reset credential is an access token minted by the forgot-password
/// flow. The new hash is persisted here; a reset that reports success has
/// really changed the stored credential.
pub struct ResetPasswordUseCase<'a, U, T>
where
    U: UserStore,
    T: TokenService,
{
    user_store: &'a U,
    token_service: &'a T,
}

impl<'a, U, T> ResetPasswordUseCase<'a, U, T>
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

    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip(self, new_password))]
    pub async fn execute(
        &self,
        reset_token: &str,
        new_password: Password,
    ) -> Result<(), ResetPasswordError> {
        let user_id = self.token_service.verify_access(reset_token)?;

        let user = self
            .user_store
            .find_by_id(&user_id)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => ResetPasswordError::UserNotFound,
                other => ResetPasswordError::UserStoreError(other),
            })?;

        let password_hash = compute_password_hash(new_password)
            .await
            .map_err(ResetPasswordError::HashingError)?;

        self.user_store
            .set_password_hash(user.id(), password_hash)
            .await
            .map_err(ResetPasswordError::UserStoreError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password_hash::verify_password_hash;
    use async_trait::async_trait;
    use mantra_core::{Email, PendingRegistration, User, UserId, UserSummary};
    use secrecy::Secret;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    struct MockUserStore {
        user: Arc<RwLock<Option<User>>>,
    }

    #[async_trait]
    impl UserStore for MockUserStore {
        async fn insert_user(&self, _user: User) -> Result<(), UserStoreError> {
            unimplemented!()
        }

        async fn find_by_email(&self, _email: &Email) -> Result<User, UserStoreError> {
            unimplemented!()
        }

        async fn find_by_id(&self, id: &UserId) -> Result<User, UserStoreError> {
            let user = self.user.read().await;
            match &*user {
                Some(user) if user.id() == id => Ok(user.clone()),
                _ => Err(UserStoreError::UserNotFound),
            }
        }

        async fn find_summary_by_id(&self, _id: &UserId) -> Result<UserSummary, UserStoreError> {
            unimplemented!()
        }

        async fn set_password_hash(
            &self,
            id: &UserId,
            password_hash: Secret<String>,
        ) -> Result<(), UserStoreError> {
            let mut slot = self.user.write().await;
            let Some(user) = slot.as_ref().filter(|u| u.id() == id) else {
                return Err(UserStoreError::UserNotFound);
            };
            *slot = Some(User::parse(
                user.id().clone(),
                user.first_name().to_owned(),
                user.email().clone(),
                password_hash,
                user.status(),
            ));
            Ok(())
        }

        async fn mark_inactive(&self, _id: &UserId) -> Result<(), UserStoreError> {
            unimplemented!()
        }
    }

    struct FakeTokenService {
        reset_token: String,
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

        fn issue_access(&self, _user_id: &UserId) -> Result<String, TokenError> {
            unimplemented!()
        }

        fn verify_access(&self, token: &str) -> Result<UserId, TokenError> {
            if token == self.reset_token {
                Ok(self.user_id.clone())
            } else {
                Err(TokenError::TokenInvalid)
            }
        }

        fn issue_refresh(&self, _user_id: &UserId) -> Result<String, TokenError> {
            unimplemented!()
        }

        fn verify_refresh(&self, _token: &str) -> Result<UserId, TokenError> {
            unimplemented!()
        }
    }

    fn email(s: &str) -> Email {
        Email::try_from(Secret::from(s.to_owned())).unwrap()
    }

    fn password(s: &str) -> Password {
        Password::try_from(Secret::from(s.to_owned())).unwrap()
    }

    #[tokio::test]
    async fn reset_persists_the_new_hash() {
        let user = User::new(
            UserId::new(),
            "Ann".to_owned(),
            email("ann@x.com"),
            Secret::from("old-hash".to_owned()),
        );
        let user_id = user.id().clone();
        let user_store = MockUserStore {
            user: Arc::new(RwLock::new(Some(user))),
        };
        let token_service = FakeTokenService {
            reset_token: "reset-tok".to_owned(),
            user_id,
        };
        let use_case = ResetPasswordUseCase::new(&user_store, &token_service);

        use_case
            .execute("reset-tok", password("N3w!Passwd"))
            .await
            .unwrap();

        let stored = user_store.user.read().await.clone().unwrap();
        assert!(
            verify_password_hash(
                stored.password_hash().clone(),
                Secret::from("N3w!Passwd".to_owned()),
            )
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn reset_with_bad_token_changes_nothing() {
        let user = User::new(
            UserId::new(),
            "Ann".to_owned(),
            email("ann@x.com"),
            Secret::from("old-hash".to_owned()),
        );
        let user_id = user.id().clone();
        let user_store = MockUserStore {
            user: Arc::new(RwLock::new(Some(user))),
        };
        let token_service = FakeTokenService {
            reset_token: "reset-tok".to_owned(),
            user_id,
        };
        let use_case = ResetPasswordUseCase::new(&user_store, &token_service);

        let result = use_case.execute("forged", password("N3w!Passwd")).await;

        assert!(matches!(
            result,
            Err(ResetPasswordError::TokenError(TokenError::TokenInvalid))
        ));
        let stored = user_store.user.read().await.clone().unwrap();
        assert_eq!(
            secrecy::ExposeSecret::expose_secret(stored.password_hash()),
            "old-hash"
        );
    }
}
