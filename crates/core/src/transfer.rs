//! Ownership transfer payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Inbound payload for an ownership transfer.
///
/// All three ids are mandatory; the timestamp defaults to "now" when the
/// caller leaves it out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransfer {
    pub vehicle_id: String,
    pub owner_old_id: String,
    pub owner_new_id: String,
    #[serde(default)]
    pub date_of_transfer: Option<DateTime<Utc>>,
}

impl NewTransfer {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.vehicle_id.is_empty() || self.owner_old_id.is_empty() || self.owner_new_id.is_empty()
        {
            return Err(CoreError::validation(
                "vehicleId, ownerOldId, ownerNewId are required",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ids_required() {
        let t = NewTransfer {
            vehicle_id: "veh-1".to_string(),
            owner_old_id: String::new(),
            owner_new_id: "own-2".to_string(),
            date_of_transfer: None,
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_timestamp_is_optional_on_the_wire() {
        let json = r#"{"vehicleId": "v", "ownerOldId": "a", "ownerNewId": "b"}"#;
        let t: NewTransfer = serde_json::from_str(json).unwrap();
        assert!(t.validate().is_ok());
        assert!(t.date_of_transfer.is_none());
    }
}
