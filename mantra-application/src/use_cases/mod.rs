pub mod activate;
pub mod delete_user;
pub mod forgot_password;
pub mod login;
pub mod refresh_access_token;
pub mod register;
pub mod reset_password;
