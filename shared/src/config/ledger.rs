//! Deposit ledger and listing configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Limits applied to deposit-order and property listings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LedgerConfig {
    /// Staff listing only returns orders whose deposit is strictly below this amount
    pub deposit_threshold: i64,

    /// Page size used when the caller does not supply `limit`
    pub default_page_size: u32,

    /// Upper bound applied to caller-supplied `limit`
    pub max_page_size: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            deposit_threshold: 45_000_000,
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

impl LedgerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            deposit_threshold: env_or("DEPOSIT_THRESHOLD", defaults.deposit_threshold),
            default_page_size: env_or("DEFAULT_PAGE_SIZE", defaults.default_page_size),
            max_page_size: env_or("MAX_PAGE_SIZE", defaults.max_page_size),
        }
    }
}
