//! Registry record shapes
//!
//! These are the registry's own records; the traffic service consumes
//! them through its client crate. Field names follow the established
//! camelCase wire contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub jmbg: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub mark: String,
    pub model: String,
    pub registration: String,
    pub year: i32,
    pub color: String,
    pub is_stolen: bool,
    pub owner: Owner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub is_suspended: bool,
    pub number_of_violation_points: i32,
    pub picture: String,
    pub owner: Owner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: String,
    pub vehicle: Vehicle,
    pub old_owner: Owner,
    pub new_owner: Owner,
    pub date_of_transfer: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Administrator {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Body of `PATCH /drivers/{id}/points`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointsUpdate {
    pub delta: i32,
}

/// Body of `PATCH /drivers/{id}/suspend`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspendUpdate {
    pub is_suspended: bool,
}
