//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Session token signing and password hashing
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `ledger` - Deposit-order filtering and listing defaults
//! - `server` - HTTP server and CORS configuration
//! - `storage` - Object storage used for property images

pub mod auth;
pub mod database;
pub mod environment;
pub mod ledger;
pub mod server;
pub mod storage;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use database::{DatabaseConfig, StorageBackend};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use ledger::LedgerConfig;
pub use server::{CorsConfig, ServerConfig};
pub use storage::StorageConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Object storage configuration
    pub storage: StorageConfig,

    /// Deposit ledger configuration
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            storage: StorageConfig::default(),
            ledger: LedgerConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut logging = LoggingConfig::for_environment(environment);
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            storage: StorageConfig::from_env(),
            ledger: LedgerConfig::from_env(),
            cors: CorsConfig::from_env(),
            logging,
        }
    }

    /// Check if the configuration is safe to run in the current environment
    ///
    /// Returns the list of problems found; an empty list means the
    /// configuration may be used.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            problems.push("JWT_SECRET must be set in production".to_string());
        }
        if self.environment.is_production() && self.storage.upload_url.is_none() {
            problems.push("STORAGE_UPLOAD_URL must be set in production".to_string());
        }
        if self.ledger.default_page_size == 0 || self.ledger.max_page_size == 0 {
            problems.push("page sizes must be positive".to_string());
        }
        problems
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is unset or cannot be parsed.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
