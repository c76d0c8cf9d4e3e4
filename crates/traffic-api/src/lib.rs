//! # Patrol Traffic API
//!
//! The traffic-violation management service: routes, handlers and the
//! HTTP error mapping over the business engines. Built as a library so
//! tests can mount the real router in-process; `main.rs` only wires
//! configuration, store and registry client together.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use routes::create_router;
pub use state::AppState;
