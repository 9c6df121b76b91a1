//! Moving job list, create, status change, and delete.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use movecrm_core::error::AppError;
use movecrm_core::events::{ChangeKind, RecordEvent, RecordKind};
use movecrm_core::traits::RecordStore;
use movecrm_core::types::MovingJobId;
use movecrm_entity::{Customer, JobStatus, MovingJob, MovingJobPatch};

use crate::context::RequestContext;
use crate::feed::ChangeFeed;
use crate::job::form::JobForm;
use crate::names::resolve_customer_name;

/// A job row with its customer's name resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobView {
    /// The job record.
    #[serde(flatten)]
    pub job: MovingJob,
    /// The customer's name, or `Unknown Customer`.
    pub customer_name: String,
}

impl JobView {
    /// Pair each job with its customer's name.
    pub fn resolve(jobs: Vec<MovingJob>, customers: &[Customer]) -> Vec<Self> {
        jobs.into_iter()
            .map(|job| {
                let customer_name = resolve_customer_name(customers, job.customer_id).to_string();
                Self { job, customer_name }
            })
            .collect()
    }
}

/// Manages the moving job collection.
#[derive(Debug, Clone)]
pub struct JobManager {
    /// Job store.
    jobs: Arc<dyn RecordStore<MovingJob>>,
    /// Customer store, read for name resolution.
    customers: Arc<dyn RecordStore<Customer>>,
    /// Where mutations are announced.
    feed: ChangeFeed,
}

impl JobManager {
    /// Creates a new job manager.
    pub fn new(
        jobs: Arc<dyn RecordStore<MovingJob>>,
        customers: Arc<dyn RecordStore<Customer>>,
        feed: ChangeFeed,
    ) -> Self {
        Self {
            jobs,
            customers,
            feed,
        }
    }

    /// Fetch every job.
    pub async fn list(&self) -> Result<Vec<MovingJob>, AppError> {
        self.jobs.list().await
    }

    /// Fetch every customer, for the name lookup and the customer picker.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        self.customers.list().await
    }

    /// Fetch jobs and customers and resolve names.
    ///
    /// A failed customer fetch is logged and every row falls back to
    /// `Unknown Customer`; a failed job fetch is returned.
    pub async fn list_with_names(&self) -> Result<Vec<JobView>, AppError> {
        let jobs = self.list().await?;
        let customers = self.list_customers().await.unwrap_or_else(|e| {
            error!(error = %e, "Error loading customers");
            Vec::new()
        });
        Ok(JobView::resolve(jobs, &customers))
    }

    /// Map the form and create the job.
    pub async fn create(&self, ctx: &RequestContext, form: &JobForm) -> Result<MovingJob, AppError> {
        let draft = form.into_draft()?;
        let job = self.jobs.create(draft).await?;

        info!(
            job_id = %job.id,
            customer_id = %job.customer_id,
            scheduled = %job.scheduled_day(),
            by = %ctx.username,
            "Moving job created"
        );
        self.feed
            .publish(RecordEvent::new(RecordKind::MovingJob, job.id, ChangeKind::Created));

        Ok(job)
    }

    /// Set a job's status. No other field changes; any status may follow
    /// any other.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: MovingJobId,
        status: JobStatus,
    ) -> Result<MovingJob, AppError> {
        let job = self.jobs.update(id, MovingJobPatch::status(status)).await?;

        info!(job_id = %id, status = %status, by = %ctx.username, "Moving job status changed");
        self.feed
            .publish(RecordEvent::new(RecordKind::MovingJob, id, ChangeKind::Updated));

        Ok(job)
    }

    /// Delete a job.
    pub async fn delete(&self, ctx: &RequestContext, id: MovingJobId) -> Result<(), AppError> {
        self.jobs.delete(id).await?;

        info!(job_id = %id, by = %ctx.username, "Moving job deleted");
        self.feed
            .publish(RecordEvent::new(RecordKind::MovingJob, id, ChangeKind::Deleted));

        Ok(())
    }
}
