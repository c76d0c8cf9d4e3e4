//! # Patrol Core
//!
//! Domain vocabulary shared by the traffic services: violation and rank
//! enums, request payloads, scoring rules and core errors. No I/O here -
//! persistence and HTTP live in their own crates.

pub mod error;
pub mod ids;
pub mod owner;
pub mod police;
pub mod transfer;
pub mod vehicle;
pub mod violation;

pub use error::{CoreError, CoreResult};
pub use ids::new_id;
pub use owner::NewOwner;
pub use police::{NewPolicePerson, Rank};
pub use transfer::NewTransfer;
pub use vehicle::{NewVehicle, VehicleSearch, VehicleVerification};
pub use violation::{NewViolation, RiskLevel, ViolationType};
