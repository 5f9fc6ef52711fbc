use axum::{Json, extract::State, response::IntoResponse};
use mantra_application::RegisterUseCase;
use mantra_core::{Email, Password, TokenService, UserStore};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use super::error::AuthApiError;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    pub email: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
}

#[derive(Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub status: u16,
    pub message: String,
    #[serde(rename = "activationToken")]
    pub activation_token: String,
}

/// First signup stage. Validates the credentials, checks the email is free
/// and hands back an activation token; nothing is persisted until the token
/// comes back through `validate`.
#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, T>(
    State((user_store, token_service)): State<(U, T)>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    T: TokenService + Clone + 'static,
{
    let (Some(first_name), Some(email), Some(password)) =
        (request.first_name, request.email, request.password)
    else {
        return Err(AuthApiError::InvalidInput(
            "Please enter required fields.".to_owned(),
        ));
    };

    // An empty string counts as a missing field, not as malformed input.
    if first_name.is_empty()
        || email.expose_secret().is_empty()
        || password.expose_secret().is_empty()
    {
        return Err(AuthApiError::InvalidInput(
            "Please enter required fields.".to_owned(),
        ));
    }

    let email = Email::try_from(email)?;
    let password = Password::try_from(password)?;

    let use_case = RegisterUseCase::new(&user_store, &token_service);
    let activation_token = use_case.execute(first_name, email, password).await?;

    Ok(Json(RegisterResponse {
        success: true,
        status: 201,
        message: "Please check email! To validation user credentials.".to_owned(),
        activation_token,
    }))
}
