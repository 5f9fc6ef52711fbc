pub mod auth;
pub mod config;
pub mod http;
pub mod persistence;

pub use auth::jwt_token_service::{JwtTokenService, TokenKeys};
pub use config::settings::Settings;
pub use persistence::{hashmap_user_store::HashMapUserStore, mongo_user_store::MongoUserStore};
