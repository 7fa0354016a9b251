//! Repository interfaces and in-memory implementations.
//!
//! Each repository is an async trait returning `DomainError`; the infra
//! crate provides the MySQL implementations.

pub mod account;
pub mod deposit_order;
pub mod profile;
pub mod property;

pub use account::{AccountRepository, InMemoryAccountRepository};
pub use deposit_order::{DepositOrderRepository, InMemoryDepositOrderRepository};
pub use profile::{InMemoryProfileRepository, ProfileRepository};
pub use property::{InMemoryPropertyRepository, PropertyRepository};
