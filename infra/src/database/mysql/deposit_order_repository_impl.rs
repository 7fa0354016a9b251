//! MySQL implementation of the DepositOrderRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use re_core::domain::entities::DepositOrder;
use re_core::errors::DomainError;
use re_core::repositories::DepositOrderRepository;
use re_shared::Pagination;

use super::{column, db_error, parsed_column, uuid_column};

pub struct MySqlDepositOrderRepository {
    pool: MySqlPool,
}

impl MySqlDepositOrderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_order(row: &MySqlRow) -> Result<DepositOrder, DomainError> {
        Ok(DepositOrder {
            id: uuid_column(row, "id")?,
            customer_id: uuid_column(row, "customer_id")?,
            property_id: uuid_column(row, "property_id")?,
            deposit_amount: column(row, "deposit_amount")?,
            status: parsed_column(row, "status")?,
            created_at: column(row, "created_at")?,
        })
    }
}

#[async_trait]
impl DepositOrderRepository for MySqlDepositOrderRepository {
    async fn create(&self, order: DepositOrder) -> Result<DepositOrder, DomainError> {
        let query = r#"
            INSERT INTO deposit_orders (id, customer_id, property_id, deposit_amount, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(order.id.to_string())
            .bind(order.customer_id.to_string())
            .bind(order.property_id.to_string())
            .bind(order.deposit_amount)
            .bind(order.status.as_str())
            .bind(order.created_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to create deposit order"))?;

        Ok(order)
    }

    async fn find_below_amount(
        &self,
        threshold: i64,
        pagination: Pagination,
    ) -> Result<Vec<DepositOrder>, DomainError> {
        let query = r#"
            SELECT id, customer_id, property_id, deposit_amount, status, created_at
            FROM deposit_orders
            WHERE deposit_amount < ?
            ORDER BY deposit_amount DESC, created_at ASC
            LIMIT ? OFFSET ?
        "#;

        let rows = sqlx::query(query)
            .bind(threshold)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list deposit orders"))?;

        rows.iter().map(Self::row_to_order).collect()
    }

    async fn find_by_customer(
        &self,
        customer_id: Uuid,
        pagination: Pagination,
    ) -> Result<Vec<DepositOrder>, DomainError> {
        let query = r#"
            SELECT id, customer_id, property_id, deposit_amount, status, created_at
            FROM deposit_orders
            WHERE customer_id = ?
            ORDER BY created_at ASC
            LIMIT ? OFFSET ?
        "#;

        let rows = sqlx::query(query)
            .bind(customer_id.to_string())
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list customer deposit orders"))?;

        rows.iter().map(Self::row_to_order).collect()
    }
}
