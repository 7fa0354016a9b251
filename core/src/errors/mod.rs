//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, TokenError, ValidationError};

use re_shared::error_codes;
use thiserror::Error;

/// Coarse error taxonomy shared by every operation.
///
/// The api crate maps each kind onto exactly one HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    Conflict,
    NotFound,
    Unauthorized,
    Forbidden,
    UploadFailed,
    Internal,
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Image upload failed: {message}")]
    UploadFailed { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
                ErrorKind::BadRequest
            }
            DomainError::Conflict { .. } => ErrorKind::Conflict,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Forbidden { .. } => ErrorKind::Forbidden,
            DomainError::Token(TokenError::TokenGenerationFailed) => ErrorKind::Internal,
            DomainError::Unauthorized | DomainError::Token(_) => ErrorKind::Unauthorized,
            DomainError::UploadFailed { .. } => ErrorKind::UploadFailed,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Auth(auth) => match auth {
                AuthError::EmailAlreadyRegistered => ErrorKind::Conflict,
                AuthError::AccountNotFound | AuthError::ProfileNotFound => ErrorKind::NotFound,
                AuthError::InvalidCredentials => ErrorKind::Unauthorized,
                AuthError::AccountInactive
                | AuthError::InsufficientRole { .. }
                | AuthError::IdentityMismatch => ErrorKind::Forbidden,
            },
        }
    }

    /// Stable machine-readable code for API clients
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => error_codes::VALIDATION_ERROR,
            DomainError::Conflict { .. } => error_codes::CONFLICT,
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Forbidden { .. } => error_codes::FORBIDDEN,
            DomainError::Unauthorized => error_codes::UNAUTHORIZED,
            DomainError::UploadFailed { .. } => error_codes::UPLOAD_FAILED,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Auth(auth) => match auth {
                AuthError::EmailAlreadyRegistered => error_codes::EMAIL_ALREADY_REGISTERED,
                AuthError::AccountNotFound => error_codes::ACCOUNT_NOT_FOUND,
                AuthError::ProfileNotFound => error_codes::PROFILE_NOT_FOUND,
                AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
                AuthError::AccountInactive => error_codes::ACCOUNT_INACTIVE,
                AuthError::InsufficientRole { .. } => error_codes::INSUFFICIENT_ROLE,
                AuthError::IdentityMismatch => error_codes::IDENTITY_MISMATCH,
            },
            DomainError::Token(token) => match token {
                TokenError::MissingToken => error_codes::TOKEN_MISSING,
                TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
                TokenError::TokenGenerationFailed => error_codes::INTERNAL_ERROR,
                _ => error_codes::TOKEN_INVALID,
            },
            DomainError::ValidationErr(validation) => match validation {
                ValidationError::RequiredField { .. } => error_codes::REQUIRED_FIELD,
                ValidationError::InvalidEmail => error_codes::INVALID_EMAIL,
                ValidationError::InvalidPagination { .. } => error_codes::INVALID_PAGINATION,
                ValidationError::ImageRequired => error_codes::IMAGE_REQUIRED,
                _ => error_codes::BAD_REQUEST,
            },
        }
    }

    /// Message safe to hand back to callers.
    ///
    /// Internal failures are replaced with a generic message; their detail
    /// belongs in the logs only.
    pub fn public_message(&self) -> String {
        match self {
            DomainError::Internal { .. }
            | DomainError::Token(TokenError::TokenGenerationFailed) => {
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Shorthand for a storage failure
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Shorthand for a missing required field
    pub fn required(field: &str) -> Self {
        DomainError::ValidationErr(ValidationError::RequiredField {
            field: field.to_string(),
        })
    }
}

impl From<re_shared::PaginationError> for DomainError {
    fn from(error: re_shared::PaginationError) -> Self {
        DomainError::ValidationErr(ValidationError::InvalidPagination {
            message: error.to_string(),
        })
    }
}
