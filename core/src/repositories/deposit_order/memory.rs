//! In-memory implementation of DepositOrderRepository

use async_trait::async_trait;
use re_shared::Pagination;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::DepositOrder;
use crate::errors::DomainError;

use super::trait_::DepositOrderRepository;

/// Orders kept in insertion order
#[derive(Clone, Default)]
pub struct InMemoryDepositOrderRepository {
    orders: Arc<RwLock<Vec<DepositOrder>>>,
}

impl InMemoryDepositOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DepositOrderRepository for InMemoryDepositOrderRepository {
    async fn create(&self, order: DepositOrder) -> Result<DepositOrder, DomainError> {
        let mut orders = self.orders.write().await;
        orders.push(order.clone());
        Ok(order)
    }

    async fn find_below_amount(
        &self,
        threshold: i64,
        pagination: Pagination,
    ) -> Result<Vec<DepositOrder>, DomainError> {
        let orders = self.orders.read().await;
        let mut matching: Vec<DepositOrder> = orders
            .iter()
            .filter(|o| o.deposit_amount < threshold)
            .cloned()
            .collect();

        // Stable sort keeps booking order among equal amounts
        matching.sort_by(|a, b| b.deposit_amount.cmp(&a.deposit_amount));

        Ok(pagination.apply(matching))
    }

    async fn find_by_customer(
        &self,
        customer_id: Uuid,
        pagination: Pagination,
    ) -> Result<Vec<DepositOrder>, DomainError> {
        let orders = self.orders.read().await;
        let mut owned: Vec<DepositOrder> = orders
            .iter()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect();

        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        Ok(pagination.apply(owned))
    }
}
