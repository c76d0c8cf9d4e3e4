//! PostgreSQL backend: row types and repositories.

pub mod repos;
pub mod schema;

pub use repos::{
    create_lazy_pool, create_pool, init_database, run_migrations, OwnerRepo, PoliceRepo,
    TransferRepo, VehicleRepo, ViolationRepo,
};
