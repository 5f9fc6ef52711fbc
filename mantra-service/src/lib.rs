mod auth_service;
mod tracing;

pub use auth_service::AuthService;

// Re-export commonly used types
pub use mantra_adapters::{HashMapUserStore, JwtTokenService, MongoUserStore, Settings, TokenKeys};
pub use mantra_core::{TokenService, UserStore};
