//! # Violation Module
//!
//! Violation types, the point/risk scoring tables and the intake payload.
//! The scoring rules here are the single source of truth - both the intake
//! engine (point deltas pushed to the registry) and the driver report
//! (risk scores) go through these functions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Severity of a recorded traffic violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ViolationType {
    Minor,
    Major,
    Critical,
}

impl ViolationType {
    /// Code string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationType::Minor => "MINOR",
            ViolationType::Major => "MAJOR",
            ViolationType::Critical => "CRITICAL",
        }
    }

    /// Parse from the stored code string.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "MINOR" => Ok(ViolationType::Minor),
            "MAJOR" => Ok(ViolationType::Major),
            "CRITICAL" => Ok(ViolationType::Critical),
            other => Err(CoreError::InvalidViolationType(other.to_string())),
        }
    }

    /// Point delta pushed to the driver's registry record when a violation
    /// of this type is recorded.
    pub fn point_delta(&self) -> i32 {
        match self {
            ViolationType::Minor => 1,
            ViolationType::Major => 3,
            ViolationType::Critical => 5,
        }
    }

    /// Weight of this type in the driver risk report.
    pub fn risk_weight(&self) -> i32 {
        match self {
            ViolationType::Minor => 2,
            ViolationType::Major => 5,
            ViolationType::Critical => 10,
        }
    }

    /// The type actually recorded, given the vehicle's stolen flag.
    ///
    /// Violations involving a stolen vehicle are always recorded at
    /// maximal severity, whatever the caller submitted.
    pub fn effective(submitted: ViolationType, vehicle_is_stolen: bool) -> ViolationType {
        if vehicle_is_stolen {
            ViolationType::Critical
        } else {
            submitted
        }
    }
}

impl fmt::Display for ViolationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Risk classification derived from a driver's violation history.
///
/// Never stored - recomputed on every report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a risk score. Boundaries are strict: a score of exactly
    /// 10 is still LOW, exactly 20 still MEDIUM.
    pub fn classify(score: i32) -> Self {
        if score > 20 {
            RiskLevel::High
        } else if score > 10 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inbound payload for recording a violation.
///
/// `vehicle_id` carries the vehicle's registration string - the intake
/// engine resolves it against the registry before anything is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewViolation {
    pub type_of_violation: ViolationType,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: String,
    pub driver_id: String,
    pub vehicle_id: String,
    #[serde(default)]
    pub police_id: Option<String>,
}

impl NewViolation {
    /// The officer reference, if one was actually supplied.
    pub fn police_ref(&self) -> Option<&str> {
        self.police_id.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_type_str() {
        assert_eq!(ViolationType::Minor.as_str(), "MINOR");
        assert_eq!(ViolationType::Critical.as_str(), "CRITICAL");
        assert_eq!(
            ViolationType::from_str("MAJOR").unwrap(),
            ViolationType::Major
        );
        assert!(ViolationType::from_str("SEVERE").is_err());
    }

    #[test]
    fn test_point_delta_table() {
        assert_eq!(ViolationType::Minor.point_delta(), 1);
        assert_eq!(ViolationType::Major.point_delta(), 3);
        assert_eq!(ViolationType::Critical.point_delta(), 5);
    }

    #[test]
    fn test_risk_weight_table() {
        assert_eq!(ViolationType::Minor.risk_weight(), 2);
        assert_eq!(ViolationType::Major.risk_weight(), 5);
        assert_eq!(ViolationType::Critical.risk_weight(), 10);
    }

    #[test]
    fn test_stolen_vehicle_escalates() {
        assert_eq!(
            ViolationType::effective(ViolationType::Minor, true),
            ViolationType::Critical
        );
        assert_eq!(
            ViolationType::effective(ViolationType::Major, true),
            ViolationType::Critical
        );
        assert_eq!(
            ViolationType::effective(ViolationType::Minor, false),
            ViolationType::Minor
        );
    }

    #[test]
    fn test_risk_level_boundaries() {
        // strict > on both boundaries
        assert_eq!(RiskLevel::classify(0), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(10), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(11), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(20), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(21), RiskLevel::High);
    }

    #[test]
    fn test_new_violation_wire_format() {
        let json = r#"{
            "typeOfViolation": "MINOR",
            "location": "Bulevar Oslobodjenja 12",
            "driverId": "DRV-1",
            "vehicleId": "NS-123-AB",
            "policeId": ""
        }"#;
        let v: NewViolation = serde_json::from_str(json).unwrap();
        assert_eq!(v.type_of_violation, ViolationType::Minor);
        assert_eq!(v.vehicle_id, "NS-123-AB");
        assert!(v.date.is_none());
        // empty policeId counts as absent
        assert!(v.police_ref().is_none());
    }

    #[test]
    fn test_unknown_violation_type_rejected() {
        let json = r#"{"typeOfViolation": "HUGE", "driverId": "d", "vehicleId": "v"}"#;
        assert!(serde_json::from_str::<NewViolation>(json).is_err());
    }
}
