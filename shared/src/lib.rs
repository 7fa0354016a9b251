//! Shared utilities and common types for the Estate Office server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures and error codes
//! - Pagination parameters for list endpoints
//! - Validation helpers (email format, log masking)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, LedgerConfig,
    LoggingConfig, ServerConfig, StorageBackend, StorageConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{Pagination, PaginationError};
pub use utils::validation;
