//! Registry stub service binary

use std::sync::Arc;

use anyhow::Result;
use patrol_registry_api::{router, RegistryConfig, RegistryStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "patrol_registry_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RegistryConfig::from_env();
    let store = Arc::new(RegistryStore::seeded());
    let app = router(store);

    let addr = config.bind_address();
    tracing::info!("🚗 registry service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
