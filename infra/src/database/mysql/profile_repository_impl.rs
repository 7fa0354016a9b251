//! MySQL implementation of the ProfileRepository trait.
//!
//! Each profile kind lives in its own table keyed by `account_id`.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use re_core::domain::entities::{CustomerProfile, EmployeeProfile, ManagerProfile, RoleProfile};
use re_core::errors::{AuthError, DomainError};
use re_core::repositories::ProfileRepository;

use super::{column, db_error, uuid_column};

pub struct MySqlProfileRepository {
    pool: MySqlPool,
}

impl MySqlProfileRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_customer(row: &MySqlRow) -> Result<RoleProfile, DomainError> {
        Ok(RoleProfile::Customer(CustomerProfile {
            id: uuid_column(row, "id")?,
            account_id: uuid_column(row, "account_id")?,
            name: column(row, "name")?,
            email: column(row, "email")?,
            phone: column(row, "phone")?,
            address: column(row, "address")?,
        }))
    }

    fn row_to_manager(row: &MySqlRow) -> Result<RoleProfile, DomainError> {
        Ok(RoleProfile::Manager(ManagerProfile {
            id: uuid_column(row, "id")?,
            account_id: uuid_column(row, "account_id")?,
            name: column(row, "name")?,
            email: column(row, "email")?,
            phone: column(row, "phone")?,
            department: column(row, "department")?,
        }))
    }

    fn row_to_employee(row: &MySqlRow) -> Result<RoleProfile, DomainError> {
        Ok(RoleProfile::Employee(EmployeeProfile {
            id: uuid_column(row, "id")?,
            account_id: uuid_column(row, "account_id")?,
            name: column(row, "name")?,
            email: column(row, "email")?,
            phone: column(row, "phone")?,
            department: column(row, "department")?,
            manager_id: uuid_column(row, "manager_id")?,
        }))
    }
}

#[async_trait]
impl ProfileRepository for MySqlProfileRepository {
    async fn create(&self, profile: RoleProfile) -> Result<RoleProfile, DomainError> {
        if self.find_by_account(profile.account_id()).await?.is_some() {
            return Err(DomainError::Conflict {
                message: "Account already has a profile".to_string(),
            });
        }

        let query = match &profile {
            RoleProfile::Customer(p) => sqlx::query(
                "INSERT INTO customer_profiles (id, account_id, name, email, phone, address) \
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(p.id.to_string())
            .bind(p.account_id.to_string())
            .bind(&p.name)
            .bind(&p.email)
            .bind(&p.phone)
            .bind(&p.address),
            RoleProfile::Manager(p) => sqlx::query(
                "INSERT INTO manager_profiles (id, account_id, name, email, phone, department) \
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(p.id.to_string())
            .bind(p.account_id.to_string())
            .bind(&p.name)
            .bind(&p.email)
            .bind(&p.phone)
            .bind(&p.department),
            RoleProfile::Employee(p) => sqlx::query(
                "INSERT INTO employee_profiles \
                 (id, account_id, name, email, phone, department, manager_id) \
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(p.id.to_string())
            .bind(p.account_id.to_string())
            .bind(&p.name)
            .bind(&p.email)
            .bind(&p.phone)
            .bind(&p.department)
            .bind(p.manager_id.to_string()),
        };

        query
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to create profile"))?;

        Ok(profile)
    }

    async fn find_by_account(&self, account_id: Uuid) -> Result<Option<RoleProfile>, DomainError> {
        let account_id = account_id.to_string();

        let customer = sqlx::query(
            "SELECT id, account_id, name, email, phone, address \
             FROM customer_profiles WHERE account_id = ? LIMIT 1",
        )
        .bind(&account_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find customer profile"))?;
        if let Some(row) = customer {
            return Self::row_to_customer(&row).map(Some);
        }

        let manager = sqlx::query(
            "SELECT id, account_id, name, email, phone, department \
             FROM manager_profiles WHERE account_id = ? LIMIT 1",
        )
        .bind(&account_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find manager profile"))?;
        if let Some(row) = manager {
            return Self::row_to_manager(&row).map(Some);
        }

        let employee = sqlx::query(
            "SELECT id, account_id, name, email, phone, department, manager_id \
             FROM employee_profiles WHERE account_id = ? LIMIT 1",
        )
        .bind(&account_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find employee profile"))?;

        employee.as_ref().map(Self::row_to_employee).transpose()
    }

    async fn update(&self, profile: RoleProfile) -> Result<RoleProfile, DomainError> {
        let query = match &profile {
            RoleProfile::Customer(p) => sqlx::query(
                "UPDATE customer_profiles SET name = ?, phone = ?, address = ? WHERE account_id = ?",
            )
            .bind(&p.name)
            .bind(&p.phone)
            .bind(&p.address)
            .bind(p.account_id.to_string()),
            RoleProfile::Manager(p) => sqlx::query(
                "UPDATE manager_profiles SET name = ?, phone = ?, department = ? WHERE account_id = ?",
            )
            .bind(&p.name)
            .bind(&p.phone)
            .bind(&p.department)
            .bind(p.account_id.to_string()),
            RoleProfile::Employee(p) => sqlx::query(
                "UPDATE employee_profiles SET name = ?, phone = ?, department = ? WHERE account_id = ?",
            )
            .bind(&p.name)
            .bind(&p.phone)
            .bind(&p.department)
            .bind(p.account_id.to_string()),
        };

        let result = query
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update profile"))?;

        // MySQL reports zero affected rows when values are unchanged
        if result.rows_affected() == 0 && self.find_by_account(profile.account_id()).await?.is_none() {
            return Err(AuthError::ProfileNotFound.into());
        }

        Ok(profile)
    }
}
