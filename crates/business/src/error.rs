//! Business layer errors
//!
//! One enum across all services; the HTTP layer maps variants onto
//! status codes.

use patrol_core::CoreError;
use patrol_persistence::PersistenceError;
use patrol_registry_client::RemoteError;
use thiserror::Error;

/// Business operation errors
#[derive(Debug, Error)]
pub enum BusinessError {
    // === Intake rejections ===
    #[error("invalid vehicle registration")]
    InvalidVehicleRegistration,

    #[error("invalid driver id")]
    InvalidDriverId,

    #[error("driver is suspended - cannot create violation")]
    DriverSuspended,

    #[error("police person is suspended")]
    PoliceSuspended,

    // === Not found ===
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("Owner not found: {0}")]
    OwnerNotFound(String),

    #[error("Police person not found: {0}")]
    PoliceNotFound(String),

    // === Rank ladder ===
    #[error("already at maximum rank")]
    AlreadyMaxRank,

    #[error("already at minimum rank")]
    AlreadyMinRank,

    // === Remote ===
    #[error("registry request failed: {0}")]
    Registry(#[from] RemoteError),

    // === Wrapped errors ===
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("credential hashing failed: {0}")]
    Credential(#[from] bcrypt::BcryptError),
}

/// Result type alias for business operations
pub type BusinessResult<T> = Result<T, BusinessError>;

impl BusinessError {
    /// True for every "the referenced record does not exist" case.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::VehicleNotFound(_) | Self::OwnerNotFound(_) | Self::PoliceNotFound(_) => true,
            Self::Persistence(e) => e.is_not_found(),
            _ => false,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Core(CoreError::Validation(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intake_rejection_messages() {
        assert_eq!(
            BusinessError::DriverSuspended.to_string(),
            "driver is suspended - cannot create violation"
        );
        assert_eq!(
            BusinessError::InvalidVehicleRegistration.to_string(),
            "invalid vehicle registration"
        );
    }

    #[test]
    fn test_not_found_classification() {
        assert!(BusinessError::OwnerNotFound("own-1".into()).is_not_found());
        assert!(
            BusinessError::Persistence(PersistenceError::not_found("Vehicle", "v")).is_not_found()
        );
        assert!(!BusinessError::DriverSuspended.is_not_found());
    }
}
