//! Value objects representing immutable results handed to the presentation layer.

pub mod auth_response;
pub mod deposit_details;

// Re-export commonly used types
pub use auth_response::{AccountSummary, AuthResponse, EmployeeCreated, ProfileDetails};
pub use deposit_details::{ContactDetails, DepositOrderDetails, StaffDepositOrder};
