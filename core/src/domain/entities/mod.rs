//! Domain entities representing core business objects.

pub mod account;
pub mod deposit_order;
pub mod profile;
pub mod property;
pub mod token;


// Re-export commonly used types
pub use account::{Account, Role};
pub use deposit_order::{DepositOrder, DepositStatus};
pub use profile::{CustomerProfile, EmployeeProfile, ManagerProfile, ProfileContact, RoleProfile};
pub use property::{Property, PropertyPatch, PropertySort, PropertyStatus};
pub use token::Claims;
