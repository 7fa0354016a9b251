//! Handlers under `/api/v1/account`

pub mod deposit;
pub mod employee;
pub mod login;
pub mod profile;
pub mod property;
pub mod register;
