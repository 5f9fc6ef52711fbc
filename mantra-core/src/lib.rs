pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    password::Password,
    registration::PendingRegistration,
    user::{User, UserError, UserId, UserStatus, UserSummary},
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{TokenError, TokenService},
};
