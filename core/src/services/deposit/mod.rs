//! Deposit order ledger service

mod service;

#[cfg(test)]
mod tests;

pub use service::DepositOrderService;
