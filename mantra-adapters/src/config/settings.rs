use secrecy::Secret;

use crate::auth::jwt_token_service::TokenKeys;
use crate::config::constants::{env::*, prod};

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct Settings {
    pub app_address: String,
    /// Base URL of the storefront, used to build password-reset links.
    pub client_url: String,
    pub mongodb_uri: Secret<String>,
    pub mongodb_database: String,
    pub token_keys: TokenKeys,
}

impl Settings {
    /// Load settings from the environment; a `.env` file is honored when
    /// present. Panics on missing signing secrets - the service cannot run
    /// without them.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        Self {
            app_address: std::env::var(APP_ADDRESS_ENV_VAR)
                .unwrap_or_else(|_| prod::APP_ADDRESS.to_owned()),
            client_url: require(CLIENT_URL_ENV_VAR),
            mongodb_uri: std::env::var(MONGODB_URI_ENV_VAR)
                .map(Secret::from)
                .unwrap_or_else(|_| Secret::from("mongodb://localhost:27017".to_owned())),
            mongodb_database: std::env::var(MONGODB_DATABASE_ENV_VAR)
                .unwrap_or_else(|_| "mantra".to_owned()),
            token_keys: TokenKeys {
                activation: Secret::from(require(USER_ACTIVATION_TOKEN_ENV_VAR)),
                access: Secret::from(require(USER_ACCESS_TOKEN_ENV_VAR)),
                refresh: Secret::from(require(USER_REFRESH_TOKEN_ENV_VAR)),
            },
        }
    }
}

fn require(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set"))
}
