use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use mantra_application::RefreshAccessTokenUseCase;
use mantra_core::{TokenService, UserStore};
use serde::{Deserialize, Serialize};

use crate::config::REFRESH_COOKIE_NAME;

use super::error::AuthApiError;

#[derive(Serialize, Deserialize)]
pub struct AccessTokenResponse {
    pub success: bool,
    pub status: u16,
    pub message: String,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Mints a short-lived access token from the refresh cookie. The access
/// secret never signs anything here; only the refresh secret is consulted.
#[tracing::instrument(name = "Generate access token", skip_all)]
pub async fn access_token<U, T>(
    State((user_store, token_service)): State<(U, T)>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    T: TokenService + Clone + 'static,
{
    let refresh_token = jar
        .get(REFRESH_COOKIE_NAME)
        .map(|cookie| cookie.value().to_owned())
        .ok_or(AuthApiError::Unauthorized)?;

    let use_case = RefreshAccessTokenUseCase::new(&user_store, &token_service);
    let access_token = use_case.execute(&refresh_token).await?;

    Ok(Json(AccessTokenResponse {
        success: true,
        status: 200,
        message: "Generated access token.".to_owned(),
        access_token,
    }))
}
