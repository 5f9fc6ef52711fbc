use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use mantra_core::{
    Email, User, UserId, UserStatus, UserStore, UserStoreError, UserSummary,
};
use secrecy::Secret;

/// In-memory user store for tests and local development.
///
/// Keyed by user id; email lookups scan, and inserts emulate the document
/// store's unique email index.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn insert_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email() == user.email()) {
            return Err(UserStoreError::EmailAlreadyInUse);
        }
        users.insert(user.id().clone(), user);
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .values()
            .find(|u| u.email() == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users.get(id).cloned().ok_or(UserStoreError::UserNotFound)
    }

    async fn find_summary_by_id(&self, id: &UserId) -> Result<UserSummary, UserStoreError> {
        let users = self.users.read().await;
        users
            .get(id)
            .map(|u| UserSummary {
                id: u.id().clone(),
                first_name: u.first_name().to_owned(),
                email: u.email().clone(),
            })
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn set_password_hash(
        &self,
        id: &UserId,
        password_hash: Secret<String>,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(id).ok_or(UserStoreError::UserNotFound)?;

        *user = User::parse(
            user.id().clone(),
            user.first_name().to_owned(),
            user.email().clone(),
            password_hash,
            user.status(),
        );
        Ok(())
    }

    async fn mark_inactive(&self, id: &UserId) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(id).ok_or(UserStoreError::UserNotFound)?;

        *user = User::parse(
            user.id().clone(),
            user.first_name().to_owned(),
            user.email().clone(),
            user.password_hash().clone(),
            UserStatus::Inactive,
        );
        Ok(())
    }
}
