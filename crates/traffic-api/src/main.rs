//! Traffic service binary

use anyhow::{Context, Result};
use patrol_business::ServiceContext;
use patrol_persistence::init_database;
use patrol_registry_client::RegistryClient;
use patrol_traffic_api::{create_router, AppState, ServiceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "patrol_traffic_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env();

    let pool = init_database(&config.database_url())
        .await
        .context("Failed to connect to database")?;

    let registry = RegistryClient::new(&config.registry_base_url, config.registry_timeout())
        .context("Failed to build registry client")?;

    let state = AppState::new(ServiceContext::new(pool, registry));
    let app = create_router(state);

    let addr = config.bind_address();
    tracing::info!(
        registry = %config.registry_base_url,
        "🚓 traffic service listening on http://{}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
