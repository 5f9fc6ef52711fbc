pub mod email;
pub mod password;
pub mod registration;
pub mod user;
