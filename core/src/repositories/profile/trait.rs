//! Role profile repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::RoleProfile;
use crate::errors::DomainError;

/// One store for every profile kind, keyed by owning account
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Persist a new profile. An account holds at most one profile.
    async fn create(&self, profile: RoleProfile) -> Result<RoleProfile, DomainError>;

    /// Find the profile owned by an account
    async fn find_by_account(&self, account_id: Uuid) -> Result<Option<RoleProfile>, DomainError>;

    /// Replace an existing profile
    ///
    /// # Returns
    /// * `Err(DomainError::Auth(AuthError::ProfileNotFound))` - No profile for this account
    async fn update(&self, profile: RoleProfile) -> Result<RoleProfile, DomainError>;
}
