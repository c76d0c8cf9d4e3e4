//! Application state

use patrol_registry_client::RegistryClient;
use sqlx::PgPool;

/// Shared application state
#[derive(Clone)]
pub struct AuthState {
    pub pool: PgPool,
    pub registry: RegistryClient,
    pub jwt_secret: String,
    pub issuer: String,
}
