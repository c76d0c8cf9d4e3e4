//! Auth service binary

use anyhow::{Context, Result};
use patrol_auth_api::store::UserRepo;
use patrol_auth_api::{router, AuthConfig, AuthState};
use patrol_registry_client::RegistryClient;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "patrol_auth_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AuthConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url())
        .await
        .context("Failed to connect to database")?;
    UserRepo::init_schema(&pool)
        .await
        .context("Failed to initialize schema")?;

    let registry = RegistryClient::new(&config.registry_base_url, config.registry_timeout())
        .context("Failed to build registry client")?;

    let state = AuthState {
        pool,
        registry,
        jwt_secret: config.jwt_secret.clone(),
        issuer: config.issuer.clone(),
    };
    let app = router(state);

    let addr = config.bind_address();
    tracing::info!("🔐 auth service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
