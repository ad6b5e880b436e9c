//! Application configuration loaded from environment variables.

use std::env;
use std::fmt;

use quire_infra::DatabaseConfig;

/// Configuration errors detected at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API_KEY must be set to a non-empty value")]
    MissingApiKey,

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Shared secret gating the mutating API methods.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self(key))
    }

    /// Exact comparison against a presented header value.
    pub fn matches(&self, presented: Option<&str>) -> bool {
        presented == Some(self.0.as_str())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub api_key: ApiKey,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = ApiKey::new(env::var("API_KEY").unwrap_or_default())?;

        let database = match env::var("DATABASE_URL") {
            Ok(url) => Some(DatabaseConfig {
                url,
                max_connections: parse_var("DB_MAX_CONNECTIONS", 100)?,
                min_connections: parse_var("DB_MIN_CONNECTIONS", 10)?,
            }),
            Err(_) => None,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", 8080)?,
            api_key,
            database,
        })
    }
}

/// Parse an optional variable, falling back to `default` when unset.
fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn api_key_requires_exact_match() {
        let key = ApiKey::new("s3cret").unwrap();
        assert!(key.matches(Some("s3cret")));
        assert!(!key.matches(Some("S3CRET")));
        assert!(!key.matches(Some("s3cret ")));
        assert!(!key.matches(None));
    }

    #[test]
    fn api_key_is_redacted_in_debug_output() {
        let key = ApiKey::new("s3cret").unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
    }
}
