//! Token service module for session assertions
//!
//! Issues and verifies the HS256 JWT handed out at login.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
