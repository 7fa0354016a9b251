//! Request and response bodies of the account API

pub mod account;
pub mod deposit;
pub mod property;
pub mod query;

pub use account::{CreateEmployeeRequest, LoginRequest, ProfileRequest, RegisterRequest};
pub use deposit::CreateDepositOrderRequest;
pub use property::PropertyForm;
pub use query::{EmailQuery, PageQuery};
