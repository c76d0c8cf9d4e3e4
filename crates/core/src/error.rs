//! # Error Module
//!
//! Core domain errors, independent of any infrastructure.

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    // === Validation errors ===
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid violation type: {0}")]
    InvalidViolationType(String),

    #[error("Invalid rank: {0}")]
    InvalidRank(String),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Validation error from a message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::validation("registration is required");
        assert_eq!(err.to_string(), "Validation error: registration is required");
        assert!(err.is_validation());

        let err = CoreError::InvalidRank("SUPREME".to_string());
        assert_eq!(err.to_string(), "Invalid rank: SUPREME");
    }
}
