//! Error type definitions for authentication, session tokens and input validation
//!
//! Messages are plain English; the presentation layer maps each variant to a
//! stable machine code through [`DomainError::error_code`](super::DomainError::error_code).

use thiserror::Error;

/// Authentication and authorization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email is already registered")]
    EmailAlreadyRegistered,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account is inactive")]
    AccountInactive,

    #[error("Role {role} is not allowed to perform this action")]
    InsufficientRole { role: String },

    #[error("Requested identity does not match the authenticated account")]
    IdentityMismatch,
}

/// Session token errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Authorization token is missing")]
    MissingToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Out of range: {field} ({constraint})")]
    OutOfRange { field: String, constraint: String },

    #[error("Role {role} cannot be used here")]
    RoleNotAllowed { role: String },

    #[error("Invalid pagination: {message}")]
    InvalidPagination { message: String },

    #[error("Image file is required")]
    ImageRequired,
}
