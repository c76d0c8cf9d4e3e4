//! # Patrol Persistence
//!
//! Persistence layer cho traffic service - PostgreSQL qua sqlx.
//!
//! Row types serialize straight onto the HTTP wire (camelCase), repos are
//! plain structs with associated query fns, and every query fn accepts
//! either the pool or an open transaction.

pub mod error;
pub mod postgres;

pub use error::{PersistenceError, PersistenceResult};
pub use postgres::schema::{
    OwnerRow, PoliceRow, TransferDetail, TransferRow, VehicleDetail, VehicleRow, ViolationRow,
};
pub use postgres::{
    create_lazy_pool, create_pool, init_database, run_migrations, OwnerRepo, PoliceRepo,
    TransferRepo, VehicleRepo, ViolationRepo,
};
