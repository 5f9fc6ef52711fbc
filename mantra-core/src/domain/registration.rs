use secrecy::Secret;

use super::email::Email;

/// Registration data between signup and activation.
///
/// Instead of a pending-users table, this rides inside the signed
/// activation token; nothing touches the store until the token comes back.
#[derive(Debug, Clone)]
pub struct PendingRegistration {
    pub first_name: String,
    pub email: Email,
    pub password_hash: Secret<String>,
}
