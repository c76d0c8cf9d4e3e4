//! Vehicle payloads - registration, search and verification requests

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Inbound payload for registering a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub mark: String,
    pub model: String,
    pub registration: String,
    pub year: i32,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub is_stolen: bool,
    pub owner_id: String,
}

impl NewVehicle {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.registration.is_empty() {
            return Err(CoreError::validation("registration is required"));
        }
        if self.owner_id.is_empty() {
            return Err(CoreError::validation("ownerId is required"));
        }
        Ok(())
    }
}

/// Substring filters for the vehicle search. Empty filters match anything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSearch {
    #[serde(default)]
    pub mark: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub registration: String,
}

/// Request for verifying a vehicle against its claimed owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleVerification {
    pub registration: String,
    pub jmbg: String,
}

impl VehicleVerification {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.registration.is_empty() || self.jmbg.is_empty() {
            return Err(CoreError::validation("registration and jmbg are required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_requires_owner() {
        let v = NewVehicle {
            mark: "Skoda".to_string(),
            model: "Octavia".to_string(),
            registration: "NS-456-CD".to_string(),
            year: 2019,
            color: "Gray".to_string(),
            is_stolen: false,
            owner_id: String::new(),
        };
        assert!(v.validate().is_err());
    }

    #[test]
    fn test_verification_requires_both_fields() {
        let req = VehicleVerification {
            registration: "NS-123-AB".to_string(),
            jmbg: String::new(),
        };
        assert!(req.validate().is_err());

        let req = VehicleVerification {
            registration: "NS-123-AB".to_string(),
            jmbg: "0101995500123".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_search_defaults_empty() {
        let s: VehicleSearch = serde_json::from_str(r#"{"mark": "Audi"}"#).unwrap();
        assert_eq!(s.mark, "Audi");
        assert_eq!(s.model, "");
    }
}
