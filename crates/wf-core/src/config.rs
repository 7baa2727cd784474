//! Configuration types and loading
//!
//! The configuration is read once at process start and handed to each
//! component. Nothing else in the workspace reads the environment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum signing secret length in bytes (HS256 uses a 256-bit key).
pub const MIN_JWT_SECRET_BYTES: usize = 32;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Time in-flight requests get to finish after a shutdown signal
    pub shutdown_grace_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    /// Apply bundled migrations on startup
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HMAC secret for token signing
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    /// `iss` claim written into and required from every token
    pub issuer: String,
    /// Token lifetime in seconds
    pub token_ttl_seconds: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable not set: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl From<ConfigError> for crate::error::WfError {
    fn from(err: ConfigError) -> Self {
        crate::error::WfError::Config(err.to_string())
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let port = parse_value("PORT", &required("PORT")?)?;
        let url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;

        if jwt_secret.len() < MIN_JWT_SECRET_BYTES {
            return Err(ConfigError::InvalidValue {
                key: "JWT_SECRET".into(),
                message: format!("must be at least {} bytes", MIN_JWT_SECRET_BYTES),
            });
        }

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let pool_size = optional(&lookup, "DATABASE_POOL_SIZE", 10)?;
        let shutdown_grace_seconds = optional(&lookup, "SHUTDOWN_GRACE_SECONDS", 30)?;
        let run_migrations = match lookup("RUN_MIGRATIONS") {
            Some(v) => parse_bool("RUN_MIGRATIONS", &v)?,
            None => true,
        };
        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "api".to_string());

        Ok(Self {
            server: ServerConfig {
                host,
                port,
                shutdown_grace_seconds,
            },
            database: DatabaseConfig {
                url,
                pool_size,
                run_migrations,
            },
            auth: AuthConfig {
                jwt_secret,
                issuer,
                token_ttl_seconds: 24 * 60 * 60,
            },
        })
    }

    /// Socket address to bind
    pub fn server_addr(&self) -> Result<std::net::SocketAddr, ConfigError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                key: "HOST".into(),
                message: e.to_string(),
            })
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })
}

fn optional<T, F>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, got '{}'", other),
        }),
    }
}
