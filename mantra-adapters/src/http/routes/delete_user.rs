use axum::{Extension, Json, extract::State, response::IntoResponse};
use mantra_application::DeleteUserUseCase;
use mantra_core::{UserId, UserStore};
use serde::{Deserialize, Serialize};

use crate::http::middleware::CurrentUser;

use super::error::AuthApiError;

#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    pub id: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub success: bool,
    pub status: u16,
    pub message: String,
}

/// Soft delete: flips the account status to inactive and keeps the record.
/// Without an explicit id in the body, the authenticated user is deleted.
#[tracing::instrument(name = "Delete user", skip_all)]
pub async fn delete_user<U>(
    State(user_store): State<U>,
    Extension(CurrentUser(current_user)): Extension<CurrentUser>,
    Json(request): Json<DeleteUserRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
{
    let id = match request.id {
        Some(id) if !id.is_empty() => UserId::from(id),
        _ => current_user.id().clone(),
    };

    let use_case = DeleteUserUseCase::new(&user_store);
    use_case.execute(&id).await?;

    Ok(Json(DeleteUserResponse {
        success: true,
        status: 200,
        message: "User deleted.".to_owned(),
    }))
}
