//! MySQL implementations of the core repository traits

mod account_repository_impl;
mod deposit_order_repository_impl;
mod profile_repository_impl;
mod property_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use deposit_order_repository_impl::MySqlDepositOrderRepository;
pub use profile_repository_impl::MySqlProfileRepository;
pub use property_repository_impl::MySqlPropertyRepository;

use re_core::errors::DomainError;
use sqlx::mysql::MySqlRow;
use sqlx::Row;
use uuid::Uuid;

/// Maps a driver error to an internal domain error with context
pub(crate) fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, "{}", context);
        DomainError::Internal {
            message: format!("{}: {}", context, e),
        }
    }
}

/// Reads a column, mapping decode failures to internal errors
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(name).map_err(|e| DomainError::Internal {
        message: format!("Failed to get {}: {}", name, e),
    })
}

/// Reads a CHAR(36) column as a UUID
pub(crate) fn uuid_column(row: &MySqlRow, name: &str) -> Result<Uuid, DomainError> {
    let raw: String = column(row, name)?;
    Uuid::parse_str(&raw).map_err(|e| DomainError::Internal {
        message: format!("Invalid UUID in {}: {}", name, e),
    })
}

/// Reads a text column through `FromStr` (roles and statuses)
pub(crate) fn parsed_column<T>(row: &MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: std::str::FromStr<Err = String>,
{
    let raw: String = column(row, name)?;
    raw.parse::<T>().map_err(|e| DomainError::Internal {
        message: format!("Invalid value in {}: {}", name, e),
    })
}
