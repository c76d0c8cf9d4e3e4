//! Owner registration payload

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Inbound payload for registering a vehicle owner.
///
/// JMBG is the unique national id of the owner; uniqueness is enforced by
/// the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOwner {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    pub jmbg: String,
    #[serde(default)]
    pub email: String,
}

impl NewOwner {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.first_name.is_empty() || self.last_name.is_empty() {
            return Err(CoreError::validation("firstName and lastName are required"));
        }
        if self.jmbg.is_empty() {
            return Err(CoreError::validation("jmbg is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> NewOwner {
        NewOwner {
            first_name: "Ana".to_string(),
            last_name: "Petrovic".to_string(),
            address: "Zmaj Jovina 5".to_string(),
            jmbg: "0101995500123".to_string(),
            email: "ana.petrovic@mail.com".to_string(),
        }
    }

    #[test]
    fn test_valid_owner() {
        assert!(owner().validate().is_ok());
    }

    #[test]
    fn test_missing_jmbg_rejected() {
        let mut o = owner();
        o.jmbg = String::new();
        assert!(o.validate().is_err());
    }
}
