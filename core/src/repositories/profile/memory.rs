//! In-memory implementation of ProfileRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::RoleProfile;
use crate::errors::{AuthError, DomainError};

use super::trait_::ProfileRepository;

/// Profile store keyed by account id
#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<Uuid, RoleProfile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn create(&self, profile: RoleProfile) -> Result<RoleProfile, DomainError> {
        let mut profiles = self.profiles.write().await;

        if profiles.contains_key(&profile.account_id()) {
            return Err(DomainError::Conflict {
                message: "Account already has a profile".to_string(),
            });
        }

        profiles.insert(profile.account_id(), profile.clone());
        Ok(profile)
    }

    async fn find_by_account(&self, account_id: Uuid) -> Result<Option<RoleProfile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(&account_id).cloned())
    }

    async fn update(&self, profile: RoleProfile) -> Result<RoleProfile, DomainError> {
        let mut profiles = self.profiles.write().await;

        match profiles.get_mut(&profile.account_id()) {
            Some(existing) => {
                *existing = profile.clone();
                Ok(profile)
            }
            None => Err(AuthError::ProfileNotFound.into()),
        }
    }
}
