//! # Patrol Auth API
//!
//! The authentication service: local user registration, login with a
//! registry-driver fallback, HS256 access tokens. Built as a library so
//! tests can mount the real router in-process.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod store;
pub mod token;

pub use config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use routes::router;
pub use state::AuthState;
pub use token::{Claims, LoginResponse, Role};
