//! In-memory implementation of PropertyRepository

use async_trait::async_trait;
use re_shared::Pagination;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Property, PropertySort};
use crate::errors::DomainError;

use super::trait_::PropertyRepository;

#[derive(Clone, Default)]
pub struct InMemoryPropertyRepository {
    properties: Arc<RwLock<HashMap<Uuid, Property>>>,
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn create(&self, property: Property) -> Result<Property, DomainError> {
        let mut properties = self.properties.write().await;
        properties.insert(property.id, property.clone());
        Ok(property)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError> {
        let properties = self.properties.read().await;
        Ok(properties.get(&id).cloned())
    }

    async fn update(&self, property: Property) -> Result<Property, DomainError> {
        let mut properties = self.properties.write().await;

        if !properties.contains_key(&property.id) {
            return Err(DomainError::NotFound {
                resource: "Property".to_string(),
            });
        }

        properties.insert(property.id, property.clone());
        Ok(property)
    }

    async fn find_by_owner(
        &self,
        owner_id: Uuid,
        sort: PropertySort,
        pagination: Pagination,
    ) -> Result<Vec<Property>, DomainError> {
        let properties = self.properties.read().await;
        let mut owned: Vec<Property> = properties
            .values()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect();

        owned.sort_by(|a, b| {
            let by_price = match sort {
                PropertySort::PriceDesc => b.price.cmp(&a.price),
                PropertySort::PriceAsc => a.price.cmp(&b.price),
            };
            by_price.then_with(|| a.created_at.cmp(&b.created_at))
        });

        Ok(pagination.apply(owned))
    }
}
