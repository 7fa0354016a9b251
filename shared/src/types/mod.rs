//! Type definitions shared by list endpoints
//!
//! - `pagination` - offset pagination parameters

pub mod pagination;

pub use pagination::{Pagination, PaginationError};
