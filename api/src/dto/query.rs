use re_core::domain::entities::PropertySort;
use re_core::errors::ValidationError;
use re_shared::{LedgerConfig, Pagination, PaginationError};
use serde::Deserialize;

/// `?email=` on single-account routes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// `?email=&page=&limit=&sort=` on listing routes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub email: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
}

impl PageQuery {
    pub fn pagination(&self, ledger: &LedgerConfig) -> Result<Pagination, PaginationError> {
        Pagination::from_query(
            self.page,
            self.limit,
            ledger.default_page_size,
            ledger.max_page_size,
        )
    }

    /// Requested property order; price descending when absent
    pub fn sort(&self) -> Result<PropertySort, ValidationError> {
        match self.sort.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(PropertySort::default()),
            Some(raw) => raw.parse().map_err(|_| ValidationError::InvalidFormat {
                field: "sort".to_string(),
            }),
        }
    }
}
