//! MySQL implementation of the PropertyRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use re_core::domain::entities::{Property, PropertySort};
use re_core::errors::DomainError;
use re_core::repositories::PropertyRepository;
use re_shared::Pagination;

use super::{column, db_error, parsed_column, uuid_column};

const COLUMNS: &str = "id, address, price, area, status, image_url, owner_id, created_at, updated_at";

pub struct MySqlPropertyRepository {
    pool: MySqlPool,
}

impl MySqlPropertyRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_property(row: &MySqlRow) -> Result<Property, DomainError> {
        Ok(Property {
            id: uuid_column(row, "id")?,
            address: column(row, "address")?,
            price: column(row, "price")?,
            area: column(row, "area")?,
            status: parsed_column(row, "status")?,
            image_url: column(row, "image_url")?,
            owner_id: uuid_column(row, "owner_id")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl PropertyRepository for MySqlPropertyRepository {
    async fn create(&self, property: Property) -> Result<Property, DomainError> {
        let query = format!(
            "INSERT INTO properties ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            COLUMNS
        );

        sqlx::query(&query)
            .bind(property.id.to_string())
            .bind(&property.address)
            .bind(property.price)
            .bind(property.area)
            .bind(property.status.as_str())
            .bind(&property.image_url)
            .bind(property.owner_id.to_string())
            .bind(property.created_at)
            .bind(property.updated_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to create property"))?;

        Ok(property)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError> {
        let query = format!("SELECT {} FROM properties WHERE id = ? LIMIT 1", COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find property"))?;

        row.as_ref().map(Self::row_to_property).transpose()
    }

    async fn update(&self, property: Property) -> Result<Property, DomainError> {
        let query = r#"
            UPDATE properties
            SET address = ?, price = ?, area = ?, status = ?, image_url = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&property.address)
            .bind(property.price)
            .bind(property.area)
            .bind(property.status.as_str())
            .bind(&property.image_url)
            .bind(property.updated_at)
            .bind(property.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update property"))?;

        // updated_at always changes, so zero rows means the id is unknown
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Property".to_string(),
            });
        }

        Ok(property)
    }

    async fn find_by_owner(
        &self,
        owner_id: Uuid,
        sort: PropertySort,
        pagination: Pagination,
    ) -> Result<Vec<Property>, DomainError> {
        let direction = match sort {
            PropertySort::PriceDesc => "DESC",
            PropertySort::PriceAsc => "ASC",
        };
        let query = format!(
            "SELECT {} FROM properties WHERE owner_id = ? \
             ORDER BY price {}, created_at ASC LIMIT ? OFFSET ?",
            COLUMNS, direction
        );

        let rows = sqlx::query(&query)
            .bind(owner_id.to_string())
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list properties"))?;

        rows.iter().map(Self::row_to_property).collect()
    }
}
