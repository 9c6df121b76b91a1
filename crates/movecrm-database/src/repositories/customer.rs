//! Customer repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use movecrm_core::error::{AppError, ErrorKind};
use movecrm_core::result::AppResult;
use movecrm_core::traits::RecordStore;
use movecrm_core::types::CustomerId;
use movecrm_entity::{Customer, CustomerPatch, NewCustomer};

/// PostgreSQL-backed customer collection.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    /// Create a new customer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<Customer> for CustomerRepository {
    async fn list(&self) -> AppResult<Vec<Customer>> {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY created_at ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list customers", e))
    }

    async fn create(&self, draft: NewCustomer) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (id, name, email, phone, address, notes) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(CustomerId::new())
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.address)
        .bind(&draft.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create customer", e))
    }

    async fn update(&self, id: CustomerId, patch: CustomerPatch) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>(
            "UPDATE customers SET \
                name = COALESCE($2, name), \
                email = COALESCE($3, email), \
                phone = COALESCE($4, phone), \
                address = COALESCE($5, address), \
                notes = COALESCE($6, notes), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.email)
        .bind(&patch.phone)
        .bind(&patch.address)
        .bind(&patch.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update customer", e))?
        .ok_or_else(|| AppError::not_found(format!("customer {id} not found")))
    }

    async fn delete(&self, id: CustomerId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete customer", e)
            })?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("customer {id} not found")));
        }
        Ok(())
    }
}
