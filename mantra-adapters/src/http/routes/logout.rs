use axum::{Json, response::IntoResponse};
use axum_extra::extract::{CookieJar, cookie::Cookie};
use serde::{Deserialize, Serialize};

use crate::config::{REFRESH_COOKIE_NAME, REFRESH_COOKIE_PATH};

use super::error::AuthApiError;

#[derive(Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub status: u16,
    pub message: String,
}

/// Clears the refresh cookie. Issued tokens stay valid until they expire;
/// there is no revocation list.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout(jar: CookieJar) -> Result<impl IntoResponse, AuthApiError> {
    // The refresh cookie is path-scoped to the refresh endpoint, so it is
    // never in this request's jar; the clearing cookie has to be sent
    // unconditionally, with the same name and path the login cookie had.
    let cleared = Cookie::build((REFRESH_COOKIE_NAME, ""))
        .path(REFRESH_COOKIE_PATH)
        .http_only(true)
        .max_age(time::Duration::ZERO)
        .build();
    let jar = jar.add(cleared);

    Ok((
        jar,
        Json(LogoutResponse {
            success: true,
            status: 200,
            message: "Logged out.".to_owned(),
        }),
    ))
}
