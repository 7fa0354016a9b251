//! Account repository trait defining the interface for credential persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Account;
use crate::errors::DomainError;

/// Repository trait for Account persistence operations
///
/// Emails are stored normalized (trimmed, lowercase); callers normalize
/// before lookup.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its email
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with this email
    /// * `Err(DomainError)` - Storage error
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Persist a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account
    /// * `Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))` - Email taken
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Delete an account
    ///
    /// Only used to roll back a registration whose profile write failed.
    ///
    /// # Returns
    /// * `Ok(true)` - Account was deleted
    /// * `Ok(false)` - Account not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Check if an account exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
