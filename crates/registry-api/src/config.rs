//! Registry service configuration

use std::env;

/// Environment-sourced configuration.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
        }
    }
}

impl RegistryConfig {
    /// Load config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("SERVICE_HOST").unwrap_or(defaults.host),
            port: env::var("SERVICE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();
        assert_eq!(config.port, 8081);
        assert_eq!(config.bind_address(), "0.0.0.0:8081");
    }
}
