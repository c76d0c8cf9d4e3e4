//! Auth routes

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AuthState;

pub fn router(state: AuthState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/users", post(handlers::register))
        .route("/login", post(handlers::login))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
