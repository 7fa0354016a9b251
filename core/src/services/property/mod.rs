//! Property catalog service
//!
//! Staff list properties with an uploaded image, update them partially and
//! page through their own listings.

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::PropertyService;
pub use types::NewProperty;
