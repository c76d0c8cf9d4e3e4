//! Registry routes

use std::sync::Arc;

use axum::routing::{get, patch};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::store::RegistryStore;

pub fn router(store: Arc<RegistryStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        // Vehicles
        .route("/vehicles", get(handlers::list_vehicles))
        .route("/vehicles/:registration", get(handlers::vehicle_by_registration))
        .route("/vehicles/owner/:jmbg", get(handlers::vehicle_by_owner_jmbg))
        // Drivers
        .route("/drivers", get(handlers::list_drivers))
        .route("/drivers/:id", get(handlers::driver_by_id))
        .route("/drivers/email/:email", get(handlers::driver_by_email))
        .route("/drivers/:id/points", patch(handlers::update_driver_points))
        .route("/drivers/:id/suspend", patch(handlers::update_driver_suspension))
        // Owners / transfers / admins
        .route("/owners", get(handlers::list_owners))
        .route("/transfers", get(handlers::list_transfers))
        .route("/admins", get(handlers::list_admins))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
