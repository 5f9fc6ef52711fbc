use axum::{Json, extract::State, response::IntoResponse};
use mantra_application::ActivateUseCase;
use mantra_core::{TokenService, UserStore};
use serde::{Deserialize, Serialize};

use super::error::AuthApiError;

#[derive(Debug, Deserialize)]
pub struct ActivateRequest {
    #[serde(rename = "activationToken")]
    pub activation_token: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ActivateResponse {
    pub success: bool,
    pub status: u16,
    pub message: String,
}

/// Second signup stage: the activation token carries the registration data,
/// so a valid token is all that is needed to create the account.
#[tracing::instrument(name = "Validate registration", skip_all)]
pub async fn activate<U, T>(
    State((user_store, token_service)): State<(U, T)>,
    Json(request): Json<ActivateRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    T: TokenService + Clone + 'static,
{
    let activation_token = request
        .activation_token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AuthApiError::InvalidInput("Activation token not found!".to_owned()))?;

    let use_case = ActivateUseCase::new(&user_store, &token_service);
    use_case.execute(&activation_token).await?;

    Ok(Json(ActivateResponse {
        success: true,
        status: 200,
        message: "Activation Success! Please login.".to_owned(),
    }))
}
