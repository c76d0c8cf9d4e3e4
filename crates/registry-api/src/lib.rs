//! # Patrol Registry API
//!
//! The vehicle-registry stub service: an in-memory, mutex-guarded record
//! set seeded with mock data, served over the registry's HTTP contract.
//! Built as a library so tests can mount the real router in-process.

pub mod config;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod seed;
pub mod store;

pub use config::RegistryConfig;
pub use routes::router;
pub use seed::SEED_PASSWORD;
pub use store::{Records, RegistryStore, SUSPENSION_THRESHOLD};
