use color_eyre::eyre::{Result, eyre};
use mantra_service::{AuthService, JwtTokenService, MongoUserStore, Settings};
use mongodb::Client;
use secrecy::ExposeSecret;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load();

    let client = Client::with_uri_str(settings.mongodb_uri.expose_secret()).await?;
    let database = client.database(&settings.mongodb_database);

    let user_store = MongoUserStore::new(&database);
    user_store
        .ensure_indexes()
        .await
        .map_err(|e| eyre!("failed to create indexes: {e}"))?;

    let token_service = JwtTokenService::new(settings.token_keys);

    let auth_service = AuthService::new(user_store, token_service, settings.client_url);

    let listener = tokio::net::TcpListener::bind(&settings.app_address).await?;
    auth_service.run(listener).await?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
