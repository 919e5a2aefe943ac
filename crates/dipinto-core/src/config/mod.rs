//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod client;
pub mod logging;
pub mod session;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::client::ClientConfig;
pub use self::logging::LoggingConfig;
pub use self::session::SessionConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Token signing settings.
    pub auth: AuthConfig,
    /// Session cookie settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Allowed client settings.
    pub client: ClientConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Database connection pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `DIPINTO__`, then validates
    /// the result.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("DIPINTO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the auth pipeline cannot run with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        check_ttl("auth.session_ttl_hours", self.auth.session_ttl_hours)?;
        check_ttl("session.cookie_ttl_hours", self.session.cookie_ttl_hours)?;
        if self.session.cookie_name.is_empty() {
            return Err(AppError::configuration("session.cookie_name must not be empty"));
        }
        if self.client.origin.is_empty() {
            return Err(AppError::configuration("client.origin must not be empty"));
        }
        Ok(())
    }
}

/// Overlay loaded when `DIPINTO_ENV` is unset or blank.
///
/// No `config/production.toml` is committed, so the signing secret must come
/// from `DIPINTO__AUTH__JWT_SECRET`.
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Resolves the overlay name from the value of `DIPINTO_ENV`.
pub fn resolve_environment(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(env) if !env.is_empty() => env,
        _ => DEFAULT_ENVIRONMENT,
    }
}

/// Upper bound for either session horizon, in hours.
pub const MAX_TTL_HOURS: u64 = 24 * 366;

fn check_ttl(key: &str, hours: u64) -> Result<(), AppError> {
    if hours == 0 || hours > MAX_TTL_HOURS {
        return Err(AppError::configuration(format!(
            "{key} must be between 1 and {MAX_TTL_HOURS} hours, got {hours}"
        )));
    }
    Ok(())
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}
