pub mod error;
pub mod identity;

pub use error::{not_found, ApiError};
pub use identity::resolve_caller;
