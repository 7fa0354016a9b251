//! HTTP API of the Estate Office back office.
//!
//! Exposes the account, property and deposit-order operations of `re_core`
//! under `/api/v1/account`, with bearer-token authentication on the
//! protected routes.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState, Repositories};
