use mantra_core::{UserId, UserStore, UserStoreError};

#[derive(Debug, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found.")]
    UserNotFound,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

/// Delete use case - a soft delete.
///
/// Flips the status to `inactive` and nothing else. Outstanding access and
/// refresh tokens stay valid until they expire on their own; there is no
/// revocation list to add them to.
pub struct DeleteUserUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> DeleteUserUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "DeleteUserUseCase::execute", skip(self))]
    pub async fn execute(&self, id: &UserId) -> Result<(), DeleteUserError> {
        self.user_store
            .mark_inactive(id)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => DeleteUserError::UserNotFound,
                other => DeleteUserError::UserStoreError(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mantra_core::{Email, User, UserStatus, UserSummary};
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

        async fn find_by_id(&self, _id: &UserId) -> Result<User, UserStoreError> {
            unimplemented!()
        }

        async fn find_summary_by_id(&self, _id: &UserId) -> Result<UserSummary, UserStoreError> {
            unimplemented!()
        }

        async fn set_password_hash(
            &self,
            _id: &UserId,
            _password_hash: Secret<String>,
        ) -> Result<(), UserStoreError> {
            unimplemented!()
        }

        async fn mark_inactive(&self, id: &UserId) -> Result<(), UserStoreError> {
            let mut slot = self.user.write().await;
            let Some(user) = slot.as_ref().filter(|u| u.id() == id) else {
                return Err(UserStoreError::UserNotFound);
            };
            *slot = Some(User::parse(
                user.id().clone(),
                user.first_name().to_owned(),
                user.email().clone(),
                user.password_hash().clone(),
                UserStatus::Inactive,
            ));
            Ok(())
        }
    }

    #[tokio::test]
    async fn delete_marks_user_inactive_without_removing_record() {
        let user = User::new(
            UserId::new(),
            "Ann".to_owned(),
            Email::try_from(Secret::from("ann@x.com".to_owned())).unwrap(),
            Secret::from("hash".to_owned()),
        );
        let id = user.id().clone();
        let user_store = MockUserStore {
            user: Arc::new(RwLock::new(Some(user))),
        };
        let use_case = DeleteUserUseCase::new(&user_store);

        use_case.execute(&id).await.unwrap();

        let stored = user_store.user.read().await.clone().unwrap();
        assert_eq!(stored.status(), UserStatus::Inactive);
        assert_eq!(stored.id(), &id);
    }

    #[tokio::test]
    async fn delete_unknown_user_fails() {
        let user_store = MockUserStore {
            user: Arc::new(RwLock::new(None)),
        };
        let use_case = DeleteUserUseCase::new(&user_store);

        let result = use_case.execute(&UserId::new()).await;

        assert!(matches!(result, Err(DeleteUserError::UserNotFound)));
    }
}
