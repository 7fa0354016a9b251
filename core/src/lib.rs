//! # Estate Office Core
//!
//! Core business logic and domain layer for the brokerage back office.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Account, DepositOrder, Property, Role, RoleProfile};
pub use errors::{AuthError, DomainError, DomainResult, ErrorKind, TokenError, ValidationError};
