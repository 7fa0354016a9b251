//! Deposit order repository trait.

use async_trait::async_trait;
use re_shared::Pagination;
use uuid::Uuid;

use crate::domain::entities::DepositOrder;
use crate::errors::DomainError;

#[async_trait]
pub trait DepositOrderRepository: Send + Sync {
    async fn create(&self, order: DepositOrder) -> Result<DepositOrder, DomainError>;

    /// Orders with `deposit_amount < threshold`, largest amount first
    async fn find_below_amount(
        &self,
        threshold: i64,
        pagination: Pagination,
    ) -> Result<Vec<DepositOrder>, DomainError>;

    /// Orders booked by one customer, oldest first
    async fn find_by_customer(
        &self,
        customer_id: Uuid,
        pagination: Pagination,
    ) -> Result<Vec<DepositOrder>, DomainError>;
}
