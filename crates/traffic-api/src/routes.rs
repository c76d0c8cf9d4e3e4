//! Traffic API routes

use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        // Police
        .route("/police", post(handlers::create_police).get(handlers::list_police))
        .route("/police/:id", get(handlers::get_police))
        .route("/police/:id/toggle-suspend", patch(handlers::toggle_police_suspend))
        .route("/police/:id/rank", patch(handlers::change_police_rank))
        // Owners
        .route("/owners", post(handlers::create_owner).get(handlers::list_owners))
        .route("/owners/:id", get(handlers::get_owner))
        // Vehicles
        .route("/vehicles", post(handlers::create_vehicle).get(handlers::list_vehicles))
        .route("/vehicles/search", post(handlers::search_vehicles))
        .route("/vehicles/verify", post(handlers::verify_vehicle))
        // Violations
        .route("/violations", post(handlers::create_violation).get(handlers::list_violations))
        .route("/violations/:id", get(handlers::get_violation))
        .route("/violations/driver/:driverId", get(handlers::list_violations_by_driver))
        // Reports
        .route("/drivers/:id/report", get(handlers::driver_report))
        // Transfers
        .route("/transfers", post(handlers::create_transfer).get(handlers::list_transfers))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
