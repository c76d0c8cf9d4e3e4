//! Application state

use patrol_business::ServiceContext;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub ctx: Arc<ServiceContext>,
}

impl AppState {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx: Arc::new(ctx) }
    }
}
