//! Registry wire DTOs
//!
//! Shapes of the JSON the vehicle registry serves. Driver state is owned
//! by the registry; these types only carry it through a single
//! request/response cycle and are never persisted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryOwner {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    pub jmbg: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryVehicle {
    pub id: String,
    pub mark: String,
    pub model: String,
    pub registration: String,
    pub year: i32,
    pub color: String,
    pub is_stolen: bool,
    pub owner: RegistryOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryDriver {
    pub id: String,
    pub is_suspended: bool,
    pub number_of_violation_points: i32,
    #[serde(default)]
    pub picture: String,
    pub owner: RegistryOwner,
}

/// Body of `PATCH /drivers/{id}/points`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointsUpdate {
    pub delta: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_decodes_registry_json() {
        let json = r#"{
            "id": "DRV-3",
            "isSuspended": false,
            "numberOfViolationPoints": 4,
            "picture": "driver3.jpg",
            "owner": {
                "id": "OWN-2",
                "firstName": "Ivana",
                "lastName": "Savic",
                "address": "Temerinska 40",
                "jmbg": "0505997500321",
                "email": "ivana.savic2@mail.com"
            }
        }"#;
        let driver: RegistryDriver = serde_json::from_str(json).unwrap();
        assert_eq!(driver.number_of_violation_points, 4);
        assert_eq!(driver.owner.jmbg, "0505997500321");
    }
}
