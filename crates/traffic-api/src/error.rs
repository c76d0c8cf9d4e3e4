//! HTTP error mapping
//!
//! Maps the business error taxonomy onto status codes: NotFound -> 404,
//! conflicts -> 409, validation and intake rejections -> 400, everything
//! that requires the registry or the store to have worked -> 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use patrol_business::BusinessError;
use patrol_core::CoreError;
use serde_json::json;

/// Business error carried out of a handler.
pub struct ApiError(BusinessError);

/// Result type alias for handlers
pub type ApiResult<T> = Result<T, ApiError>;

impl From<BusinessError> for ApiError {
    fn from(err: BusinessError) -> Self {
        Self(err)
    }
}

pub(crate) fn status_for(err: &BusinessError) -> StatusCode {
    match err {
        BusinessError::InvalidVehicleRegistration
        | BusinessError::InvalidDriverId
        | BusinessError::PoliceSuspended => StatusCode::BAD_REQUEST,

        BusinessError::DriverSuspended
        | BusinessError::AlreadyMaxRank
        | BusinessError::AlreadyMinRank => StatusCode::CONFLICT,

        BusinessError::VehicleNotFound(_)
        | BusinessError::OwnerNotFound(_)
        | BusinessError::PoliceNotFound(_) => StatusCode::NOT_FOUND,

        BusinessError::Core(CoreError::Validation(_))
        | BusinessError::Core(CoreError::InvalidViolationType(_))
        | BusinessError::Core(CoreError::InvalidRank(_)) => StatusCode::BAD_REQUEST,

        BusinessError::Registry(_) => StatusCode::INTERNAL_SERVER_ERROR,

        BusinessError::Persistence(e) if e.is_not_found() => StatusCode::NOT_FOUND,
        BusinessError::Persistence(e) if e.is_unique_violation() => StatusCode::CONFLICT,
        BusinessError::Persistence(_) | BusinessError::Credential(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl ApiError {
    /// Status plus `{"error": ...}` body. Internals stay in the log, not
    /// on the wire.
    pub(crate) fn into_parts(self) -> (StatusCode, serde_json::Value) {
        let status = status_for(&self.0);

        let message = if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
            match self.0 {
                BusinessError::Registry(_) => "registry request failed".to_string(),
                _ => "internal error".to_string(),
            }
        } else {
            self.0.to_string()
        };

        (status, json!({ "error": message }))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.into_parts();
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrol_persistence::PersistenceError;

    #[test]
    fn test_intake_rejection_statuses() {
        assert_eq!(
            status_for(&BusinessError::InvalidVehicleRegistration),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&BusinessError::InvalidDriverId),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&BusinessError::DriverSuspended),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&BusinessError::PoliceSuspended),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_lookup_and_store_statuses() {
        assert_eq!(
            status_for(&BusinessError::VehicleNotFound("v".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&BusinessError::Persistence(PersistenceError::UniqueViolation(
                "owners_jmbg_key".into()
            ))),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&BusinessError::Core(CoreError::validation("missing field"))),
            StatusCode::BAD_REQUEST
        );
    }
}
