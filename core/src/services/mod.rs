//! Business services containing domain logic and use cases.

pub mod account;
pub mod authorization;
pub mod deposit;
pub mod password;
pub mod property;
pub mod storage;
pub mod token;

// Re-export commonly used types
pub use account::{AccountService, CreateEmployeeInput, RegisterInput};
pub use authorization::AuthorizationGate;
pub use deposit::DepositOrderService;
pub use password::{BcryptPasswordHasher, PasswordHasher};
pub use property::{NewProperty, PropertyService};
pub use storage::{ImageStore, ImageUpload, InMemoryImageStore};
pub use token::{TokenService, TokenServiceConfig};
