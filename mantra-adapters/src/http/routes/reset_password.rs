use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use mantra_application::ResetPasswordUseCase;
use mantra_core::{Password, TokenService, UserStore};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use super::error::AuthApiError;

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: Option<Secret<String>>,
}

#[derive(Serialize, Deserialize)]
pub struct ResetPasswordResponse {
    pub success: bool,
    pub status: u16,
    pub message: String,
}

/// Consumes the reset link's token and persists the new password hash.
#[tracing::instrument(name = "Reset password", skip_all)]
pub async fn reset_password<U, T>(
    State((user_store, token_service)): State<(U, T)>,
    Path(token): Path<String>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    T: TokenService + Clone + 'static,
{
    let password = match request.password {
        Some(password) if !token.is_empty() => password,
        _ => {
            return Err(AuthApiError::InvalidInput(
                "Unauthorised access to reset password.".to_owned(),
            ));
        }
    };
    let password = Password::try_from(password)?;

    let use_case = ResetPasswordUseCase::new(&user_store, &token_service);
    use_case.execute(&token, password).await?;

    Ok(Json(ResetPasswordResponse {
        success: true,
        status: 200,
        message: "Password reset success.".to_owned(),
    }))
}
