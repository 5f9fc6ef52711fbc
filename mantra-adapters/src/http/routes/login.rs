use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::{CookieJar, cookie::Cookie};
use mantra_application::LoginUseCase;
use mantra_core::{Email, TokenService, UserStore};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::config::{REFRESH_COOKIE_MAX_AGE_DAYS, REFRESH_COOKIE_NAME, REFRESH_COOKIE_PATH};

use super::error::AuthApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
}

#[derive(Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub status: u16,
    pub message: String,
}

/// Login hands out the refresh token only, as an httpOnly cookie scoped to
/// the refresh endpoint. The access token comes later from `access-token`.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, T>(
    State((user_store, token_service)): State<(U, T)>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    T: TokenService + Clone + 'static,
{
    let (Some(email), Some(password)) = (request.email, request.password) else {
        return Err(AuthApiError::InvalidInput(
            "Please enter required email address.".to_owned(),
        ));
    };
    if email.expose_secret().is_empty() || password.expose_secret().is_empty() {
        return Err(AuthApiError::InvalidInput(
            "Please enter required email address.".to_owned(),
        ));
    }

    // Beyond presence, credential shape is not validated here: an address
    // that cannot parse belongs to no account, and a candidate password is
    // never policy-checked. Either way the answer is the same uniform
    // credentials error.
    let email = Email::try_from(email).map_err(|_| AuthApiError::InvalidCredentials)?;

    let use_case = LoginUseCase::new(&user_store, &token_service);
    let refresh_token = use_case.execute(email, password).await?;

    let cookie = Cookie::build((REFRESH_COOKIE_NAME, refresh_token))
        .path(REFRESH_COOKIE_PATH)
        .http_only(true)
        .max_age(time::Duration::days(REFRESH_COOKIE_MAX_AGE_DAYS))
        .build();
    let jar = jar.add(cookie);

    Ok((
        jar,
        Json(LoginResponse {
            success: true,
            status: 200,
            message: "Login Success!".to_owned(),
        }),
    ))
}
