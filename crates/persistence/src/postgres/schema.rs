//! Database row types
//!
//! Row types cho sqlx mapping, serialized straight onto the wire - the
//! HTTP contract uses camelCase field names, matching the serde renames
//! here. Schema lives in migrations/20260730120000_init.sql.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row type for the `owners` table
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRow {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub jmbg: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row type for the `vehicles` table
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRow {
    pub id: String,
    pub mark: String,
    pub model: String,
    pub registration: String,
    pub year: i32,
    pub color: String,
    pub is_stolen: bool,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Vehicle with its owner attached, as served on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetail {
    #[serde(flatten)]
    pub vehicle: VehicleRow,
    pub owner: OwnerRow,
}

/// Row type for the `police` table.
///
/// The password hash never leaves the service.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliceRow {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub rank: String,
    pub is_suspended: bool,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row type for the `violations` table
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationRow {
    pub id: String,
    pub type_of_violation: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub driver_id: String,
    pub vehicle_id: String,
    pub police_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Row type for the `ownership_transfers` table
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRow {
    pub id: String,
    pub vehicle_id: String,
    pub owner_old_id: String,
    pub owner_new_id: String,
    pub date_of_transfer: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Transfer with its referenced records attached, as served on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferDetail {
    #[serde(flatten)]
    pub transfer: TransferRow,
    pub vehicle: VehicleDetail,
    pub owner_old: OwnerRow,
    pub owner_new: OwnerRow,
}
