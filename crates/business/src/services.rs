//! Service context shared by the business services
//!
//! Holds the process-wide resources: the store's connection pool and the
//! one shared registry client. Both are safe for concurrent reuse, so a
//! single context is cloned into every request handler.

use patrol_registry_client::RegistryClient;
use sqlx::PgPool;

/// Context for business operations - store pool plus registry client.
pub struct ServiceContext {
    pool: PgPool,
    registry: RegistryClient,
}

impl ServiceContext {
    pub fn new(pool: PgPool, registry: RegistryClient) -> Self {
        Self { pool, registry }
    }

    /// Get the store connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the registry client
    pub fn registry(&self) -> &RegistryClient {
        &self.registry
    }
}
