use axum::{Json, extract::State, response::IntoResponse};
use mantra_application::ForgotPasswordUseCase;
use mantra_core::{Email, TokenService, UserStore};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use super::error::AuthApiError;

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: Option<Secret<String>>,
}

#[derive(Serialize, Deserialize)]
pub struct ForgotPasswordResponse {
    pub success: bool,
    pub status: u16,
    pub message: String,
    pub url: String,
}

/// Builds a reset link for a registered email. Delivery is the mail
/// pipeline's job; the link is returned in the body in the meantime.
#[tracing::instrument(name = "Forgot password", skip_all)]
pub async fn forgot_password<U, T>(
    State((user_store, token_service, client_url)): State<(U, T, String)>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    T: TokenService + Clone + 'static,
{
    let email = request
        .email
        .ok_or_else(|| AuthApiError::InvalidInput("Please provide user email id.".to_owned()))?;
    let email = Email::try_from(email)?;

    let use_case = ForgotPasswordUseCase::new(&user_store, &token_service, &client_url);
    let url = use_case.execute(email).await?;

    Ok(Json(ForgotPasswordResponse {
        success: true,
        status: 200,
        message: "Please check email to reset password.".to_owned(),
        url,
    }))
}
