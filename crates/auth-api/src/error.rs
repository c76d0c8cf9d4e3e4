//! Auth errors and their HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use patrol_registry_client::RemoteError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),

    #[error("email already exists")]
    EmailTaken,

    #[error("invalid credentials")]
    InvalidCredentials,

    // === Wrapped errors ===
    #[error("database error: {0}")]
    Database(sqlx::Error),

    #[error("credential hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("registry request failed: {0}")]
    Registry(#[from] RemoteError),
}

pub type AuthResult<T> = Result<T, AuthError>;

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = err {
            if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) {
                return Self::EmailTaken;
            }
        }
        Self::Database(err)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuthError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AuthError::EmailTaken => (StatusCode::CONFLICT, self.to_string()),
            AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            AuthError::Database(_) => {
                tracing::error!(error = %self, "auth request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "database error".to_string())
            }
            AuthError::Hash(_) | AuthError::Token(_) | AuthError::Registry(_) => {
                tracing::error!(error = %self, "auth request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
