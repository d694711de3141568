//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `LOFTLINE_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   the generic `DATABASE_URL` set by managed hosting)
//!
//! ## Optional
//! - `LOFTLINE_HOST` - Bind address (default: 127.0.0.1)
//! - `LOFTLINE_PORT` - Listen port (default: 3000)
//! - `LOFTLINE_UPCOMING_WINDOW_DAYS` - How far ahead bill alerts look
//!   (default: 30)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry traces sample rate (default: 1.0)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_UPCOMING_WINDOW_DAYS: i32 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Default look-ahead window for upcoming-bill alerts, in days
    pub upcoming_window_days: i32,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("LOFTLINE_DATABASE_URL")?;
        let host = get_env_or_default("LOFTLINE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("LOFTLINE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("LOFTLINE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("LOFTLINE_PORT".to_string(), e.to_string()))?;
        let upcoming_window_days = parse_window_days(get_optional_env(
            "LOFTLINE_UPCOMING_WINDOW_DAYS",
        ))?;

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            database_url,
            host,
            port,
            upcoming_window_days,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL` (used by managed
/// Postgres attach).
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse the upcoming-bills window, rejecting non-positive values.
fn parse_window_days(raw: Option<String>) -> Result<i32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_UPCOMING_WINDOW_DAYS);
    };
    let days = raw.parse::<i32>().map_err(|e| {
        ConfigError::InvalidEnvVar("LOFTLINE_UPCOMING_WINDOW_DAYS".to_string(), e.to_string())
    })?;
    if days <= 0 {
        return Err(ConfigError::InvalidEnvVar(
            "LOFTLINE_UPCOMING_WINDOW_DAYS".to_string(),
            format!("must be positive (got {days})"),
        ));
    }
    Ok(days)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_window_days_default() {
        assert_eq!(
            parse_window_days(None).unwrap(),
            DEFAULT_UPCOMING_WINDOW_DAYS
        );
    }

    #[test]
    fn test_parse_window_days_explicit() {
        assert_eq!(parse_window_days(Some("14".to_string())).unwrap(), 14);
    }

    #[test]
    fn test_parse_window_days_rejects_zero_and_negative() {
        assert!(parse_window_days(Some("0".to_string())).is_err());
        assert!(parse_window_days(Some("-7".to_string())).is_err());
    }

    #[test]
    fn test_parse_window_days_rejects_garbage() {
        let err = parse_window_days(Some("soon".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            upcoming_window_days: 30,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }
}
