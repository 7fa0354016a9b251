//! Central authorization gate
//!
//! Every role-restricted operation resolves its caller through
//! [`AuthorizationGate::require`]; the role is always read from the stored
//! account, never from the session token.

mod gate;


pub use gate::AuthorizationGate;
