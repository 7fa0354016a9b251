//! Property repository trait.

use async_trait::async_trait;
use re_shared::Pagination;
use uuid::Uuid;

use crate::domain::entities::{Property, PropertySort};
use crate::errors::DomainError;

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn create(&self, property: Property) -> Result<Property, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError>;

    /// Replace a stored property
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No property with this id
    async fn update(&self, property: Property) -> Result<Property, DomainError>;

    /// One page of the properties listed by `owner_id`, ordered by price
    async fn find_by_owner(
        &self,
        owner_id: Uuid,
        sort: PropertySort,
        pagination: Pagination,
    ) -> Result<Vec<Property>, DomainError>;
}
