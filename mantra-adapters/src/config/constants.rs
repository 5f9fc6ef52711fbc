pub mod env {
    pub const USER_ACTIVATION_TOKEN_ENV_VAR: &str = "USER_ACTIVATION_TOKEN";
    pub const USER_ACCESS_TOKEN_ENV_VAR: &str = "USER_ACCESS_TOKEN";
    pub const USER_REFRESH_TOKEN_ENV_VAR: &str = "USER_REFRESH_TOKEN";
    pub const CLIENT_URL_ENV_VAR: &str = "CLIENT_URL";
    pub const MONGODB_URI_ENV_VAR: &str = "MONGODB_URI";
    pub const MONGODB_DATABASE_ENV_VAR: &str = "MONGODB_DATABASE";
    pub const APP_ADDRESS_ENV_VAR: &str = "APP_ADDRESS";
}

// Token lifetimes. Activation tokens are short: they carry a full pending
// registration and nothing invalidates them besides expiry.
pub const ACTIVATION_TOKEN_TTL_SECONDS: i64 = 3 * 60;
pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 15 * 60;
pub const REFRESH_TOKEN_TTL_SECONDS: i64 = 15 * 60;

// The refresh cookie outlives the refresh token itself; the token's own
// expiry is what actually bounds the session.
pub const REFRESH_COOKIE_NAME: &str = "refreshtoken";
pub const REFRESH_COOKIE_PATH: &str = "/user/refresh-token";
pub const REFRESH_COOKIE_MAX_AGE_DAYS: i64 = 7;

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:9000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
