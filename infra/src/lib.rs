//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Estate Office
//! back office. It provides concrete implementations of the repository and
//! collaborator traits declared in `re_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL repository implementations using SQLx
//! - **Storage**: HTTP upload client for property images
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use re_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Object storage module - property image uploads
pub mod storage;

pub use storage::HttpImageStore;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Object storage rejected or mangled an upload
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Http(e) => DomainError::UploadFailed {
                message: e.to_string(),
            },
            InfrastructureError::Storage(message) => DomainError::UploadFailed { message },
            other => DomainError::Internal {
                message: other.to_string(),
            },
        }
    }
}
