use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mantra_core::{Email, PendingRegistration, TokenError, TokenService, UserId};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::config::constants::{
    ACCESS_TOKEN_TTL_SECONDS, ACTIVATION_TOKEN_TTL_SECONDS, REFRESH_TOKEN_TTL_SECONDS,
};

/// Signing secrets, one per token kind.
///
/// Activation, access and refresh each get their own secret: a token issued
/// as one kind must never verify as another.
#[derive(Clone)]
pub struct TokenKeys {
    pub activation: Secret<String>,
    pub access: Secret<String>,
    pub refresh: Secret<String>,
}

#[derive(Clone)]
pub struct JwtTokenService {
    keys: TokenKeys,
}

impl JwtTokenService {
    pub fn new(keys: TokenKeys) -> Self {
        Self { keys }
    }
}

/// Claims of an activation token: the whole pending registration rides in
/// the signed payload instead of a pending-users row.
#[derive(Debug, Serialize, Deserialize)]
struct ActivationClaims {
    #[serde(rename = "firstName")]
    first_name: String,
    email: String,
    #[serde(rename = "passwordHash")]
    password_hash: String,
    exp: usize,
}

/// Claims shared by access and refresh tokens.
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    id: String,
    exp: usize,
}

impl TokenService for JwtTokenService {
    fn issue_activation(&self, registration: &PendingRegistration) -> Result<String, TokenError> {
        let claims = ActivationClaims {
            first_name: registration.first_name.clone(),
            email: registration.email.expose().to_owned(),
            password_hash: registration.password_hash.expose_secret().clone(),
            exp: expiry_timestamp(ACTIVATION_TOKEN_TTL_SECONDS)?,
        };
        sign(&claims, &self.keys.activation)
    }

    fn verify_activation(&self, token: &str) -> Result<PendingRegistration, TokenError> {
        let claims: ActivationClaims = decode_claims(token, &self.keys.activation)?;

        // A signed token with an unparseable email never came from us.
        let email =
            Email::try_from(Secret::from(claims.email)).map_err(|_| TokenError::TokenInvalid)?;

        Ok(PendingRegistration {
            first_name: claims.first_name,
            email,
            password_hash: Secret::from(claims.password_hash),
        })
    }

    fn issue_access(&self, user_id: &UserId) -> Result<String, TokenError> {
        let claims = SessionClaims {
            id: user_id.as_str().to_owned(),
            exp: expiry_timestamp(ACCESS_TOKEN_TTL_SECONDS)?,
        };
        sign(&claims, &self.keys.access)
    }

    fn verify_access(&self, token: &str) -> Result<UserId, TokenError> {
        let claims: SessionClaims = decode_claims(token, &self.keys.access)?;
        Ok(UserId::from(claims.id))
    }

    fn issue_refresh(&self, user_id: &UserId) -> Result<String, TokenError> {
        let claims = SessionClaims {
            id: user_id.as_str().to_owned(),
            exp: expiry_timestamp(REFRESH_TOKEN_TTL_SECONDS)?,
        };
        sign(&claims, &self.keys.refresh)
    }

    fn verify_refresh(&self, token: &str) -> Result<UserId, TokenError> {
        let claims: SessionClaims = decode_claims(token, &self.keys.refresh)?;
        Ok(UserId::from(claims.id))
    }
}

fn expiry_timestamp(ttl_seconds: i64) -> Result<usize, TokenError> {
    let delta = chrono::Duration::try_seconds(ttl_seconds).ok_or(TokenError::UnexpectedError(
        "Failed to create token duration".to_owned(),
    ))?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(TokenError::UnexpectedError(
            "Duration out of range".to_owned(),
        ))?
        .timestamp();

    exp.try_into()
        .map_err(|_| TokenError::UnexpectedError("Failed to cast i64 to usize".to_owned()))
}

fn sign<C: Serialize>(claims: &C, secret: &Secret<String>) -> Result<String, TokenError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .map_err(|e| TokenError::UnexpectedError(e.to_string()))
}

fn decode_claims<C: DeserializeOwned>(
    token: &str,
    secret: &Secret<String>,
) -> Result<C, TokenError> {
    decode::<C>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        _ => TokenError::TokenInvalid,
    })
}
