//! Moving job repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use movecrm_core::error::{AppError, ErrorKind};
use movecrm_core::result::AppResult;
use movecrm_core::traits::RecordStore;
use movecrm_core::types::MovingJobId;
use movecrm_entity::{MovingJob, MovingJobPatch, NewMovingJob};

/// PostgreSQL-backed moving job collection.
#[derive(Debug, Clone)]
pub struct MovingJobRepository {
    pool: PgPool,
}

impl MovingJobRepository {
    /// Create a new moving job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<MovingJob> for MovingJobRepository {
    async fn list(&self) -> AppResult<Vec<MovingJob>> {
        sqlx::query_as::<_, MovingJob>("SELECT * FROM moving_jobs ORDER BY created_at ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list jobs", e))
    }

    async fn create(&self, draft: NewMovingJob) -> AppResult<MovingJob> {
        sqlx::query_as::<_, MovingJob>(
            "INSERT INTO moving_jobs (id, customer_id, current_address, destination_address, \
             scheduled_date, status, job_size, special_items, estimated_cost, actual_cost, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING *",
        )
        .bind(MovingJobId::new())
        .bind(draft.customer_id)
        .bind(&draft.current_address)
        .bind(&draft.destination_address)
        .bind(draft.scheduled_date)
        .bind(draft.status)
        .bind(draft.job_size)
        .bind(&draft.special_items)
        .bind(draft.estimated_cost)
        .bind(draft.actual_cost)
        .bind(&draft.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job", e))
    }

    async fn update(&self, id: MovingJobId, patch: MovingJobPatch) -> AppResult<MovingJob> {
        sqlx::query_as::<_, MovingJob>(
            "UPDATE moving_jobs SET \
                customer_id = COALESCE($2, customer_id), \
                current_address = COALESCE($3, current_address), \
                destination_address = COALESCE($4, destination_address), \
                scheduled_date = COALESCE($5, scheduled_date), \
                status = COALESCE($6, status), \
                job_size = COALESCE($7, job_size), \
                special_items = COALESCE($8, special_items), \
                estimated_cost = COALESCE($9, estimated_cost), \
                actual_cost = COALESCE($10, actual_cost), \
                notes = COALESCE($11, notes), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(patch.customer_id)
        .bind(&patch.current_address)
        .bind(&patch.destination_address)
        .bind(patch.scheduled_date)
        .bind(patch.status)
        .bind(patch.job_size)
        .bind(&patch.special_items)
        .bind(patch.estimated_cost)
        .bind(patch.actual_cost)
        .bind(&patch.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update job", e))?
        .ok_or_else(|| AppError::not_found(format!("moving_job {id} not found")))
    }

    async fn delete(&self, id: MovingJobId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM moving_jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete job", e))?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("moving_job {id} not found")));
        }
        Ok(())
    }
}
