//! Account service module
//!
//! This module covers the credential store and role profiles:
//! - Public registration of customers and managers
//! - Login and session issuing
//! - Profile lookup and contact updates
//! - Employee creation by managers

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::AccountService;
pub use types::{CreateEmployeeInput, RegisterInput};
