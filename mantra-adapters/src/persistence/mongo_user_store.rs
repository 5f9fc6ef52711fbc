use mongodb::{
    Collection, Database, IndexModel,
    bson::doc,
    options::IndexOptions,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use mantra_core::{
    Email, User, UserId, UserStatus, UserStore, UserStoreError, UserSummary,
};

const USERS_COLLECTION: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Shape of a user document in the store. The storefront keeps extra profile
/// fields on the same document; they pass through untouched.
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "userId")]
    user_id: String,
    #[serde(rename = "firstName")]
    first_name: String,
    email: String,
    password: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct UserSummaryDocument {
    #[serde(rename = "userId")]
    user_id: String,
    #[serde(rename = "firstName")]
    first_name: String,
    email: String,
}

/// Document-database user store.
///
/// Takes an explicit database handle at construction; connection lifecycle
/// belongs to the caller.
#[derive(Clone)]
pub struct MongoUserStore {
    users: Collection<UserDocument>,
}

impl MongoUserStore {
    pub fn new(database: &Database) -> Self {
        Self {
            users: database.collection(USERS_COLLECTION),
        }
    }

    /// Create the unique email index the store relies on for duplicate
    /// detection. Run once at startup.
    pub async fn ensure_indexes(&self) -> Result<(), UserStoreError> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.users
            .create_index(index)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for MongoUserStore {
    #[tracing::instrument(name = "Inserting user document", skip_all)]
    async fn insert_user(&self, user: User) -> Result<(), UserStoreError> {
        let document = UserDocument {
            user_id: user.id().as_str().to_owned(),
            first_name: user.first_name().to_owned(),
            email: user.email().expose().to_owned(),
            password: user.password_hash().expose_secret().clone(),
            status: user.status().as_str().to_owned(),
        };

        self.users.insert_one(&document).await.map_err(|e| {
            if is_duplicate_key(&e) {
                UserStoreError::EmailAlreadyInUse
            } else {
                UserStoreError::UnexpectedError(e.to_string())
            }
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Finding user by email", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let document = self
            .users
            .find_one(doc! { "email": email.expose() })
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        document.ok_or(UserStoreError::UserNotFound).and_then(parse_user)
    }

    #[tracing::instrument(name = "Finding user by id", skip_all)]
    async fn find_by_id(&self, id: &UserId) -> Result<User, UserStoreError> {
        let document = self
            .users
            .find_one(doc! { "userId": id.as_str() })
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        document.ok_or(UserStoreError::UserNotFound).and_then(parse_user)
    }

    #[tracing::instrument(name = "Finding user summary by id", skip_all)]
    async fn find_summary_by_id(&self, id: &UserId) -> Result<UserSummary, UserStoreError> {
        let document = self
            .users
            .clone_with_type::<UserSummaryDocument>()
            .find_one(doc! { "userId": id.as_str() })
            .projection(doc! { "userId": 1, "firstName": 1, "email": 1, "_id": 0 })
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let document = document.ok_or(UserStoreError::UserNotFound)?;
        let email = Email::try_from(Secret::from(document.email))
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(UserSummary {
            id: UserId::from(document.user_id),
            first_name: document.first_name,
            email,
        })
    }

    #[tracing::instrument(name = "Setting new password hash", skip_all)]
    async fn set_password_hash(
        &self,
        id: &UserId,
        password_hash: Secret<String>,
    ) -> Result<(), UserStoreError> {
        let result = self
            .users
            .update_one(
                doc! { "userId": id.as_str() },
                doc! { "$set": { "password": password_hash.expose_secret() } },
            )
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "Marking user inactive", skip_all)]
    async fn mark_inactive(&self, id: &UserId) -> Result<(), UserStoreError> {
        let result = self
            .users
            .update_one(
                doc! { "userId": id.as_str() },
                doc! { "$set": { "status": UserStatus::Inactive.as_str() } },
            )
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }
}

fn parse_user(document: UserDocument) -> Result<User, UserStoreError> {
    let email = Email::try_from(Secret::from(document.email))
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let status = UserStatus::parse(&document.status)
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

    Ok(User::parse(
        UserId::from(document.user_id),
        document.first_name,
        email,
        Secret::from(document.password),
        status,
    ))
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    matches!(
        &*error.kind,
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}
