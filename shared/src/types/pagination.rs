//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};
use std::fmt;

/// Offset pagination parameters (1-indexed pages)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: u32,

    /// Number of items per page
    pub limit: u32,
}

/// Rejected caller-supplied pagination values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// `page` below 1
    InvalidPage(i64),
    /// `limit` below 1
    InvalidLimit(i64),
}

impl fmt::Display for PaginationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaginationError::InvalidPage(page) => {
                write!(f, "page must be a positive integer, got {}", page)
            }
            PaginationError::InvalidLimit(limit) => {
                write!(f, "limit must be a positive integer, got {}", limit)
            }
        }
    }
}

impl std::error::Error for PaginationError {}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Create a new pagination, clamping out-of-range values
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Build pagination from raw query values.
    ///
    /// Missing values fall back to page 1 and `default_limit`. Zero or
    /// negative values are rejected; `limit` above `max_limit` is clamped.
    pub fn from_query(
        page: Option<i64>,
        limit: Option<i64>,
        default_limit: u32,
        max_limit: u32,
    ) -> Result<Self, PaginationError> {
        let page = match page {
            None => DEFAULT_PAGE,
            Some(p) if p < 1 => return Err(PaginationError::InvalidPage(p)),
            Some(p) => u32::try_from(p).unwrap_or(u32::MAX),
        };
        let max_limit = max_limit.max(1);
        let limit = match limit {
            None => default_limit.clamp(1, max_limit),
            Some(l) if l < 1 => return Err(PaginationError::InvalidLimit(l)),
            Some(l) => u32::try_from(l).unwrap_or(u32::MAX).min(max_limit),
        };
        Ok(Self { page, limit })
    }

    /// Number of records to skip: `(page - 1) * limit`
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    /// Get the limit for queries
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Slice an already sorted collection to this page
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        items
            .into_iter()
            .skip(offset)
            .take(self.limit as usize)
            .collect()
    }
}

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 100;
