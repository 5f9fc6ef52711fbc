use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// A plaintext password that satisfied the strength policy.
///
/// Only ever held in memory on the way to the hasher; the persisted record
/// stores the argon2 hash.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let password = value.expose_secret();

        if password.chars().count() < 8 {
            return Err(UserError::WeakPassword(
                "Password must be at least 8 characters long.",
            ));
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(UserError::WeakPassword(
                "Password must contain an uppercase letter.",
            ));
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(UserError::WeakPassword(
                "Password must contain a lowercase letter.",
            ));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(UserError::WeakPassword("Password must contain a digit."));
        }
        if password.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(UserError::WeakPassword(
                "Password must contain a special character.",
            ));
        }

        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
