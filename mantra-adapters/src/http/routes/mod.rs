//! Axum route handlers for the auth surface.
//!
//! Handlers stay thin: extract request data, build domain values, run the
//! matching use case and shape the response envelope. All error mapping
//! lives in [`error::AuthApiError`].

pub mod access_token;
pub mod activate;
pub mod delete_user;
pub mod error;
pub mod forgot_password;
pub mod login;
pub mod logout;
pub mod register;
pub mod reset_password;

pub use access_token::access_token;
pub use activate::activate;
pub use delete_user::delete_user;
pub use forgot_password::forgot_password;
pub use login::login;
pub use logout::logout;
pub use register::register;
pub use reset_password::reset_password;
