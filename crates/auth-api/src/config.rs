//! Auth service configuration

use std::env;
use std::time::Duration;

/// Environment-sourced configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub host: String,
    pub port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_pass: String,
    pub db_name: String,
    pub jwt_secret: String,
    pub issuer: String,
    pub registry_base_url: String,
    pub registry_timeout_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8082,
            db_host: "localhost".to_string(),
            db_port: 5432,
            db_user: "postgres".to_string(),
            db_pass: "postgres".to_string(),
            db_name: "auth".to_string(),
            jwt_secret: "dev-secret".to_string(),
            issuer: "patrol-auth".to_string(),
            registry_base_url: "http://mup-vehicles-service:8081".to_string(),
            registry_timeout_ms: 3000,
        }
    }
}

impl AuthConfig {
    /// Load config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("SERVICE_HOST").unwrap_or(defaults.host),
            port: parse_env("SERVICE_PORT", defaults.port),
            db_host: env::var("DB_HOST").unwrap_or(defaults.db_host),
            db_port: parse_env("DB_PORT", defaults.db_port),
            db_user: env::var("DB_USER").unwrap_or(defaults.db_user),
            db_pass: env::var("DB_PASS").unwrap_or(defaults.db_pass),
            db_name: env::var("DB_NAME").unwrap_or(defaults.db_name),
            jwt_secret: env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            issuer: env::var("ISSUER").unwrap_or(defaults.issuer),
            registry_base_url: env::var("MUP_BASE_URL").unwrap_or(defaults.registry_base_url),
            registry_timeout_ms: parse_env("MUP_TIMEOUT_MS", defaults.registry_timeout_ms),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_pass, self.db_host, self.db_port, self.db_name
        )
    }

    pub fn registry_timeout(&self) -> Duration {
        Duration::from_millis(self.registry_timeout_ms)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8082");
        assert_eq!(config.issuer, "patrol-auth");
    }
}
