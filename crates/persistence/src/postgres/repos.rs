//! Repository implementations for PostgreSQL
//!
//! Every query fn takes `impl PgExecutor` so the same call runs against
//! the pool or inside an open transaction - the ownership-transfer engine
//! relies on that to keep its whole unit of work on one connection.

use crate::error::{PersistenceError, PersistenceResult};
use crate::postgres::schema::*;
use patrol_core::VehicleSearch;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgExecutor, PgPool};

// ============================================================================
// Owner Repository
// ============================================================================

/// Repository for the owners table
pub struct OwnerRepo;

impl OwnerRepo {
    pub async fn insert(ex: impl PgExecutor<'_>, owner: &OwnerRow) -> PersistenceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO owners (id, first_name, last_name, address, jmbg, email, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&owner.id)
        .bind(&owner.first_name)
        .bind(&owner.last_name)
        .bind(&owner.address)
        .bind(&owner.jmbg)
        .bind(&owner.email)
        .bind(owner.created_at)
        .bind(owner.updated_at)
        .execute(ex)
        .await?;
        Ok(())
    }

    pub async fn get_by_id(ex: impl PgExecutor<'_>, id: &str) -> PersistenceResult<OwnerRow> {
        sqlx::query_as::<_, OwnerRow>("SELECT * FROM owners WHERE id = $1")
            .bind(id)
            .fetch_optional(ex)
            .await?
            .ok_or_else(|| PersistenceError::not_found("Owner", id))
    }

    pub async fn list(ex: impl PgExecutor<'_>) -> PersistenceResult<Vec<OwnerRow>> {
        let rows = sqlx::query_as::<_, OwnerRow>("SELECT * FROM owners ORDER BY created_at DESC")
            .fetch_all(ex)
            .await?;
        Ok(rows)
    }
}

// ============================================================================
// Vehicle Repository
// ============================================================================

/// Repository for the vehicles table
pub struct VehicleRepo;

impl VehicleRepo {
    pub async fn insert(ex: impl PgExecutor<'_>, vehicle: &VehicleRow) -> PersistenceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO vehicles (id, mark, model, registration, year, color, is_stolen, owner_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(&vehicle.id)
        .bind(&vehicle.mark)
        .bind(&vehicle.model)
        .bind(&vehicle.registration)
        .bind(vehicle.year)
        .bind(&vehicle.color)
        .bind(vehicle.is_stolen)
        .bind(&vehicle.owner_id)
        .bind(vehicle.created_at)
        .bind(vehicle.updated_at)
        .execute(ex)
        .await?;
        Ok(())
    }

    pub async fn get_by_id(ex: impl PgExecutor<'_>, id: &str) -> PersistenceResult<VehicleRow> {
        sqlx::query_as::<_, VehicleRow>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(ex)
            .await?
            .ok_or_else(|| PersistenceError::not_found("Vehicle", id))
    }

    /// Fetch the vehicle row under an exclusive row lock.
    ///
    /// Must run inside an open transaction; the lock is held until that
    /// transaction commits or rolls back. Other vehicles stay unlocked.
    pub async fn get_by_id_for_update(
        ex: impl PgExecutor<'_>,
        id: &str,
    ) -> PersistenceResult<VehicleRow> {
        sqlx::query_as::<_, VehicleRow>("SELECT * FROM vehicles WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(ex)
            .await?
            .ok_or_else(|| PersistenceError::not_found("Vehicle", id))
    }

    pub async fn get_by_registration(
        ex: impl PgExecutor<'_>,
        registration: &str,
    ) -> PersistenceResult<VehicleRow> {
        sqlx::query_as::<_, VehicleRow>("SELECT * FROM vehicles WHERE registration = $1")
            .bind(registration)
            .fetch_optional(ex)
            .await?
            .ok_or_else(|| PersistenceError::not_found("Vehicle", registration))
    }

    pub async fn list(ex: impl PgExecutor<'_>) -> PersistenceResult<Vec<VehicleRow>> {
        let rows =
            sqlx::query_as::<_, VehicleRow>("SELECT * FROM vehicles ORDER BY created_at DESC")
                .fetch_all(ex)
                .await?;
        Ok(rows)
    }

    /// Case-insensitive substring search; empty filters match anything.
    pub async fn search(
        ex: impl PgExecutor<'_>,
        filter: &VehicleSearch,
    ) -> PersistenceResult<Vec<VehicleRow>> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT * FROM vehicles
            WHERE ($1 = '' OR mark ILIKE '%' || $1 || '%')
              AND ($2 = '' OR model ILIKE '%' || $2 || '%')
              AND ($3 = '' OR color ILIKE '%' || $3 || '%')
              AND ($4 = '' OR registration ILIKE '%' || $4 || '%')
            ORDER BY created_at DESC
            "#,
        )
        .bind(&filter.mark)
        .bind(&filter.model)
        .bind(&filter.color)
        .bind(&filter.registration)
        .fetch_all(ex)
        .await?;
        Ok(rows)
    }

    pub async fn set_owner(
        ex: impl PgExecutor<'_>,
        id: &str,
        owner_id: &str,
    ) -> PersistenceResult<()> {
        let result =
            sqlx::query("UPDATE vehicles SET owner_id = $1, updated_at = now() WHERE id = $2")
                .bind(owner_id)
                .bind(id)
                .execute(ex)
                .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::not_found("Vehicle", id));
        }
        Ok(())
    }
}

// ============================================================================
// Police Repository
// ============================================================================

/// Repository for the police table
pub struct PoliceRepo;

impl PoliceRepo {
    pub async fn insert(ex: impl PgExecutor<'_>, police: &PoliceRow) -> PersistenceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO police (id, first_name, last_name, rank, is_suspended, email, password, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(&police.id)
        .bind(&police.first_name)
        .bind(&police.last_name)
        .bind(&police.rank)
        .bind(police.is_suspended)
        .bind(&police.email)
        .bind(&police.password)
        .bind(police.created_at)
        .bind(police.updated_at)
        .execute(ex)
        .await?;
        Ok(())
    }

    pub async fn get_by_id(ex: impl PgExecutor<'_>, id: &str) -> PersistenceResult<PoliceRow> {
        sqlx::query_as::<_, PoliceRow>("SELECT * FROM police WHERE id = $1")
            .bind(id)
            .fetch_optional(ex)
            .await?
            .ok_or_else(|| PersistenceError::not_found("PolicePerson", id))
    }

    pub async fn list(ex: impl PgExecutor<'_>) -> PersistenceResult<Vec<PoliceRow>> {
        let rows = sqlx::query_as::<_, PoliceRow>("SELECT * FROM police ORDER BY created_at DESC")
            .fetch_all(ex)
            .await?;
        Ok(rows)
    }

    pub async fn update_profile(
        ex: impl PgExecutor<'_>,
        id: &str,
        rank: &str,
        is_suspended: bool,
    ) -> PersistenceResult<()> {
        let result = sqlx::query(
            "UPDATE police SET rank = $1, is_suspended = $2, updated_at = now() WHERE id = $3",
        )
        .bind(rank)
        .bind(is_suspended)
        .bind(id)
        .execute(ex)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::not_found("PolicePerson", id));
        }
        Ok(())
    }
}

// ============================================================================
// Violation Repository
// ============================================================================

/// Repository for the violations table
pub struct ViolationRepo;

impl ViolationRepo {
    pub async fn insert(
        ex: impl PgExecutor<'_>,
        violation: &ViolationRow,
    ) -> PersistenceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO violations (id, type_of_violation, date, location, driver_id, vehicle_id, police_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&violation.id)
        .bind(&violation.type_of_violation)
        .bind(violation.date)
        .bind(&violation.location)
        .bind(&violation.driver_id)
        .bind(&violation.vehicle_id)
        .bind(&violation.police_id)
        .bind(violation.created_at)
        .execute(ex)
        .await?;
        Ok(())
    }

    pub async fn get_by_id(ex: impl PgExecutor<'_>, id: &str) -> PersistenceResult<ViolationRow> {
        sqlx::query_as::<_, ViolationRow>("SELECT * FROM violations WHERE id = $1")
            .bind(id)
            .fetch_optional(ex)
            .await?
            .ok_or_else(|| PersistenceError::not_found("Violation", id))
    }

    pub async fn list(ex: impl PgExecutor<'_>) -> PersistenceResult<Vec<ViolationRow>> {
        let rows = sqlx::query_as::<_, ViolationRow>("SELECT * FROM violations ORDER BY date DESC")
            .fetch_all(ex)
            .await?;
        Ok(rows)
    }

    pub async fn list_by_driver(
        ex: impl PgExecutor<'_>,
        driver_id: &str,
    ) -> PersistenceResult<Vec<ViolationRow>> {
        let rows = sqlx::query_as::<_, ViolationRow>(
            "SELECT * FROM violations WHERE driver_id = $1 ORDER BY date DESC",
        )
        .bind(driver_id)
        .fetch_all(ex)
        .await?;
        Ok(rows)
    }
}

// ============================================================================
// Ownership Transfer Repository
// ============================================================================

/// Repository for the ownership_transfers table
pub struct TransferRepo;

impl TransferRepo {
    pub async fn insert(ex: impl PgExecutor<'_>, transfer: &TransferRow) -> PersistenceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO ownership_transfers (id, vehicle_id, owner_old_id, owner_new_id, date_of_transfer, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&transfer.id)
        .bind(&transfer.vehicle_id)
        .bind(&transfer.owner_old_id)
        .bind(&transfer.owner_new_id)
        .bind(transfer.date_of_transfer)
        .bind(transfer.created_at)
        .execute(ex)
        .await?;
        Ok(())
    }

    pub async fn list(ex: impl PgExecutor<'_>) -> PersistenceResult<Vec<TransferRow>> {
        let rows = sqlx::query_as::<_, TransferRow>(
            "SELECT * FROM ownership_transfers ORDER BY date_of_transfer DESC",
        )
        .fetch_all(ex)
        .await?;
        Ok(rows)
    }

    pub async fn list_by_vehicle(
        ex: impl PgExecutor<'_>,
        vehicle_id: &str,
    ) -> PersistenceResult<Vec<TransferRow>> {
        let rows = sqlx::query_as::<_, TransferRow>(
            "SELECT * FROM ownership_transfers WHERE vehicle_id = $1 ORDER BY date_of_transfer DESC",
        )
        .bind(vehicle_id)
        .fetch_all(ex)
        .await?;
        Ok(rows)
    }
}

// ============================================================================
// Database initialization
// ============================================================================

/// Create a connection pool against the given database URL.
pub async fn create_pool(database_url: &str) -> PersistenceResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create a pool without connecting. Connections are established on first
/// use; handy for tests of paths that reject before ever touching the DB.
/// The short acquire timeout keeps an unreachable store from stalling a
/// caller for the default 30 seconds.
pub fn create_lazy_pool(database_url: &str) -> PersistenceResult<PgPool> {
    let pool = PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy(database_url)?;
    Ok(pool)
}

/// Run migrations
pub async fn run_migrations(pool: &PgPool) -> PersistenceResult<()> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

/// Connect and bring the schema up to date.
pub async fn init_database(database_url: &str) -> PersistenceResult<PgPool> {
    let pool = create_pool(database_url).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
