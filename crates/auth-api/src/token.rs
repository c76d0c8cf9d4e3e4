//! JWT issuance and verification

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AuthResult;

/// Token lifetime.
pub const TOKEN_TTL_SECS: i64 = 15 * 60;

/// Role carried in the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Citizen,
    Mup,
    Traffic,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Citizen => "CITIZEN",
            Role::Mup => "MUP",
            Role::Traffic => "TRAFFIC",
        }
    }
}

/// Claims of an issued access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub role: Role,
    pub id: i64,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub token_type: String,
}

/// Issue an HS256 access token for the given identity.
pub fn issue(
    secret: &[u8],
    issuer: &str,
    user_id: i64,
    email: &str,
    role: Role,
) -> AuthResult<LoginResponse> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: email.to_string(),
        iss: issuer.to_string(),
        role,
        id: user_id,
        email: email.to_string(),
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )?;

    Ok(LoginResponse {
        access_token: token,
        expires_in: TOKEN_TTL_SECS,
        token_type: "Bearer".to_string(),
    })
}

/// Decode and validate a token issued by `issue`.
pub fn verify(secret: &[u8], token: &str) -> AuthResult<Claims> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_round_trip() {
        let secret = b"test-secret";
        let resp = issue(secret, "patrol-auth", 7, "ana@mail.com", Role::Citizen).unwrap();

        assert_eq!(resp.token_type, "Bearer");
        assert_eq!(resp.expires_in, TOKEN_TTL_SECS);

        let claims = verify(secret, &resp.access_token).unwrap();
        assert_eq!(claims.sub, "ana@mail.com");
        assert_eq!(claims.id, 7);
        assert_eq!(claims.role, Role::Citizen);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let resp = issue(b"secret-a", "patrol-auth", 1, "x@mail.com", Role::Traffic).unwrap();
        assert!(verify(b"secret-b", &resp.access_token).is_err());
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Citizen).unwrap(), "\"CITIZEN\"");
        assert_eq!(Role::Mup.as_str(), "MUP");
    }
}
