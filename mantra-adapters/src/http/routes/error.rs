use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mantra_application::{
    ActivateError, DeleteUserError, ForgotPasswordError, LoginError, RefreshAccessTokenError,
    RegisterError, ResetPasswordError,
};
use mantra_core::{TokenError, UserError, UserStoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error envelope every failed request gets: a success flag, the numeric
/// status and a message, nothing else.
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Email Id already has been used.")]
    EmailAlreadyInUse,

    // One message for unknown email and wrong password, so responses do not
    // confirm which emails are registered.
    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Invalid user request.")]
    InvalidRequest,

    #[error("User not found.")]
    UserNotFound,

    #[error("Token has expired.")]
    TokenExpired,

    #[error("Invalid token provided.")]
    TokenInvalid,

    #[error("Unauthorized access.")]
    MissingToken,

    #[error("Access denied.")]
    Unauthorized,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            AuthApiError::InvalidInput(_)
            | AuthApiError::EmailAlreadyInUse
            | AuthApiError::InvalidCredentials
            | AuthApiError::InvalidRequest
            | AuthApiError::UserNotFound => StatusCode::BAD_REQUEST,

            AuthApiError::TokenExpired
            | AuthApiError::TokenInvalid
            | AuthApiError::MissingToken
            | AuthApiError::Unauthorized => StatusCode::UNAUTHORIZED,

            AuthApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Internal detail stays in the logs; the client only sees the
        // normalized message.
        let message = match &self {
            AuthApiError::UnexpectedError(detail) => {
                tracing::error!(%detail, "request failed unexpectedly");
                "Something went wrong.".to_owned()
            }
            other => other.to_string(),
        };

        let body = Json(ErrorResponse {
            success: false,
            status: status_code.as_u16(),
            message,
        });

        (status_code, body).into_response()
    }
}

impl From<UserError> for AuthApiError {
    fn from(error: UserError) -> Self {
        AuthApiError::InvalidInput(error.to_string())
    }
}

impl From<TokenError> for AuthApiError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => AuthApiError::TokenExpired,
            TokenError::TokenInvalid => AuthApiError::TokenInvalid,
            TokenError::UnexpectedError(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<UserStoreError> for AuthApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::EmailAlreadyInUse => AuthApiError::EmailAlreadyInUse,
            UserStoreError::UserNotFound => AuthApiError::UserNotFound,
            UserStoreError::UnexpectedError(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<RegisterError> for AuthApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::EmailAlreadyInUse => AuthApiError::EmailAlreadyInUse,
            RegisterError::HashingError(e) => AuthApiError::UnexpectedError(e),
            RegisterError::TokenError(e) => e.into(),
            RegisterError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<ActivateError> for AuthApiError {
    fn from(error: ActivateError) -> Self {
        match error {
            ActivateError::TokenError(e) => e.into(),
            ActivateError::EmailAlreadyInUse => AuthApiError::EmailAlreadyInUse,
            ActivateError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<LoginError> for AuthApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::UserNotFound | LoginError::IncorrectPassword => {
                AuthApiError::InvalidCredentials
            }
            LoginError::TokenError(e) => e.into(),
            LoginError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<RefreshAccessTokenError> for AuthApiError {
    fn from(error: RefreshAccessTokenError) -> Self {
        match error {
            RefreshAccessTokenError::InvalidRefreshToken
            | RefreshAccessTokenError::UserNotFound => AuthApiError::Unauthorized,
            RefreshAccessTokenError::TokenError(e) => e.into(),
            RefreshAccessTokenError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<ForgotPasswordError> for AuthApiError {
    fn from(error: ForgotPasswordError) -> Self {
        match error {
            ForgotPasswordError::UnknownEmail => AuthApiError::InvalidRequest,
            ForgotPasswordError::TokenError(e) => e.into(),
            ForgotPasswordError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<ResetPasswordError> for AuthApiError {
    fn from(error: ResetPasswordError) -> Self {
        match error {
            ResetPasswordError::TokenError(e) => e.into(),
            ResetPasswordError::UserNotFound => AuthApiError::UserNotFound,
            ResetPasswordError::HashingError(e) => AuthApiError::UnexpectedError(e),
            ResetPasswordError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<DeleteUserError> for AuthApiError {
    fn from(error: DeleteUserError) -> Self {
        match error {
            DeleteUserError::UserNotFound => AuthApiError::UserNotFound,
            DeleteUserError::UserStoreError(e) => e.into(),
        }
    }
}
