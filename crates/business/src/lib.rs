//! # Patrol Business
//!
//! Business engines for the traffic service: the ownership-transfer
//! transaction, the violation-intake workflow with best-effort registry
//! point sync, and the management operations around owners, vehicles and
//! police persons.

pub mod error;
pub mod owner;
pub mod police;
pub mod services;
pub mod transfer;
pub mod vehicle;
pub mod violation;

pub use error::{BusinessError, BusinessResult};
pub use owner::OwnerService;
pub use police::PoliceService;
pub use services::ServiceContext;
pub use transfer::TransferService;
pub use vehicle::{VehicleService, Verification};
pub use violation::{DriverReport, PointSync, ViolationOutcome, ViolationService};
