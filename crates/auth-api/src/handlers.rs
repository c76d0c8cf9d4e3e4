//! Auth handlers
//!
//! Registration is local-only; login checks the local users table first
//! and falls back to a registry driver lookup for accounts that only
//! exist on the registry side (those authenticate with the registry
//! stub's fixed seed password).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AuthError, AuthResult};
use crate::state::AuthState;
use crate::store::UserRepo;
use crate::token::{self, Role};

/// Password of every seeded registry account. Stub-only behavior; a real
/// registry would verify credentials itself.
const REGISTRY_SEED_PASSWORD: &str = "123";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub async fn health() -> impl IntoResponse {
    Json(json!({"service": "auth", "status": "ok"}))
}

/// Register a citizen account.
pub async fn register(
    State(state): State<AuthState>,
    Json(payload): Json<NewUser>,
) -> AuthResult<impl IntoResponse> {
    let email = normalize_email(&payload.email);
    if email.is_empty() || payload.password.is_empty() {
        return Err(AuthError::Validation(
            "email and password are required".to_string(),
        ));
    }

    let hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)?;
    UserRepo::insert(
        &state.pool,
        &email,
        &hash,
        &payload.first_name,
        &payload.last_name,
        Role::Citizen,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(json!({ "email": email }))))
}

/// Authenticate and issue an access token.
pub async fn login(
    State(state): State<AuthState>,
    Json(payload): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse> {
    let email = normalize_email(&payload.email);
    let password = payload.password.trim();
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::Validation(
            "email and password are required".to_string(),
        ));
    }

    if let Some(user) = UserRepo::find_by_email(&state.pool, &email).await? {
        if !bcrypt::verify(password, &user.password)? {
            return Err(AuthError::InvalidCredentials);
        }
        let role = match user.role.as_str() {
            "MUP" => Role::Mup,
            "TRAFFIC" => Role::Traffic,
            _ => Role::Citizen,
        };
        let resp = token::issue(state.jwt_secret.as_bytes(), &state.issuer, user.id, &email, role)?;
        return Ok(Json(resp));
    }

    // Unknown locally: the account may live on the registry side only.
    tracing::info!(email = %email, "user not in local store, trying registry");
    let driver = match state.registry.driver_by_email(&email).await {
        Ok(resp) => resp.body,
        Err(err) => {
            tracing::warn!(error = %err, "registry lookup failed during login");
            None
        }
    };
    let Some(driver) = driver else {
        return Err(AuthError::InvalidCredentials);
    };
    if password != REGISTRY_SEED_PASSWORD {
        return Err(AuthError::InvalidCredentials);
    }

    tracing::info!(driver_id = %driver.id, "registry fallback login");
    let resp = token::issue(state.jwt_secret.as_bytes(), &state.issuer, 0, &email, Role::Citizen)?;
    Ok(Json(resp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_normalization() {
        assert_eq!(normalize_email("  Ana.Petrovic@Mail.COM "), "ana.petrovic@mail.com");
    }

    #[test]
    fn test_password_hash_round_trip() {
        let hash = bcrypt::hash("lozinka", bcrypt::DEFAULT_COST).unwrap();
        assert!(bcrypt::verify("lozinka", &hash).unwrap());
        assert!(!bcrypt::verify("wrong", &hash).unwrap());
    }
}
