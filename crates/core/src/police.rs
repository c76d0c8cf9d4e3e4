//! # Police Module
//!
//! Police ranks and the registration payload. The rank ladder is a fixed
//! LOW -> MEDIUM -> HIGH progression; promotions and demotions move one
//! step and stop at the ends.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Rank of a police person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rank {
    Low,
    Medium,
    High,
}

impl Rank {
    /// Code string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Low => "LOW",
            Rank::Medium => "MEDIUM",
            Rank::High => "HIGH",
        }
    }

    /// Parse from the stored code string.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "LOW" => Ok(Rank::Low),
            "MEDIUM" => Ok(Rank::Medium),
            "HIGH" => Ok(Rank::High),
            other => Err(CoreError::InvalidRank(other.to_string())),
        }
    }

    /// One step up the ladder, or `None` at the top.
    pub fn promoted(&self) -> Option<Rank> {
        match self {
            Rank::Low => Some(Rank::Medium),
            Rank::Medium => Some(Rank::High),
            Rank::High => None,
        }
    }

    /// One step down the ladder, or `None` at the bottom.
    pub fn demoted(&self) -> Option<Rank> {
        match self {
            Rank::Low => None,
            Rank::Medium => Some(Rank::Low),
            Rank::High => Some(Rank::Medium),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inbound payload for registering a police person.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPolicePerson {
    pub first_name: String,
    pub last_name: String,
    #[serde(default = "default_rank")]
    pub rank: Rank,
    pub email: String,
    pub password: String,
}

fn default_rank() -> Rank {
    Rank::Low
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_str() {
        assert_eq!(Rank::Medium.as_str(), "MEDIUM");
        assert_eq!(Rank::from_str("HIGH").unwrap(), Rank::High);
        assert!(Rank::from_str("COMMISSIONER").is_err());
    }

    #[test]
    fn test_rank_ladder() {
        assert_eq!(Rank::Low.promoted(), Some(Rank::Medium));
        assert_eq!(Rank::Medium.promoted(), Some(Rank::High));
        assert_eq!(Rank::High.promoted(), None);

        assert_eq!(Rank::High.demoted(), Some(Rank::Medium));
        assert_eq!(Rank::Medium.demoted(), Some(Rank::Low));
        assert_eq!(Rank::Low.demoted(), None);
    }

    #[test]
    fn test_new_police_defaults_to_low() {
        let json = r#"{
            "firstName": "Milan",
            "lastName": "Ilic",
            "email": "milan.ilic@police.rs",
            "password": "lozinka"
        }"#;
        let p: NewPolicePerson = serde_json::from_str(json).unwrap();
        assert_eq!(p.rank, Rank::Low);
    }
}
