//! The jobs tab.

use tracing::error;

use movecrm_core::events::RecordKind;
use movecrm_core::types::{CustomerId, MovingJobId};
use movecrm_entity::{Customer, JobStatus, MovingJob};

use crate::context::RequestContext;
use crate::feed::ChangeFeed;
use crate::job::{JobForm, JobManager};
use crate::names::resolve_customer_name;

use super::staleness::StaleTracker;

/// Job table, status controls, and the add-job form.
#[derive(Debug)]
pub struct JobBoard {
    manager: JobManager,
    tracker: StaleTracker,
    loading: bool,
    jobs: Vec<MovingJob>,
    customers: Vec<Customer>,
    form: JobForm,
    form_open: bool,
}

impl JobBoard {
    /// Create a board subscribed to `feed`. Nothing is fetched until `show`.
    pub fn new(manager: JobManager, feed: &ChangeFeed) -> Self {
        Self {
            manager,
            tracker: StaleTracker::new(
                feed.subscribe(),
                &[RecordKind::MovingJob, RecordKind::Customer],
            ),
            loading: false,
            jobs: Vec::new(),
            customers: Vec::new(),
            form: JobForm::default(),
            form_open: false,
        }
    }

    /// Bring the board up to date if anything it shows has changed.
    pub async fn show(&mut self) {
        if self.tracker.poll() {
            self.refresh().await;
        }
    }

    /// Re-fetch jobs and customers. Each failure is logged on its own and
    /// leaves that collection as it was.
    pub async fn refresh(&mut self) {
        self.tracker.clear();
        self.load_jobs().await;
        match self.manager.list_customers().await {
            Ok(customers) => self.customers = customers,
            Err(e) => error!(error = %e, "Error loading customers"),
        }
    }

    async fn load_jobs(&mut self) {
        self.loading = true;
        match self.manager.list().await {
            Ok(jobs) => self.jobs = jobs,
            Err(e) => error!(error = %e, "Error loading jobs"),
        }
        self.loading = false;
    }

    /// Submit the form. On success the form resets to its defaults, hides,
    /// and the board re-fetches; on failure it stays open and filled.
    pub async fn submit(&mut self, ctx: &RequestContext) -> bool {
        match self.manager.create(ctx, &self.form).await {
            Ok(_) => {
                self.form = JobForm::default();
                self.form_open = false;
                self.refresh().await;
                true
            }
            Err(e) => {
                error!(error = %e, "Error creating job");
                false
            }
        }
    }

    /// Set a job's status, then re-fetch. No optimistic local change.
    pub async fn change_status(
        &mut self,
        ctx: &RequestContext,
        id: MovingJobId,
        status: JobStatus,
    ) -> bool {
        match self.manager.update_status(ctx, id, status).await {
            Ok(_) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                error!(error = %e, job_id = %id, "Error updating job status");
                false
            }
        }
    }

    /// Delete a job and re-fetch.
    pub async fn delete(&mut self, ctx: &RequestContext, id: MovingJobId) -> bool {
        match self.manager.delete(ctx, id).await {
            Ok(()) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                error!(error = %e, job_id = %id, "Error deleting job");
                false
            }
        }
    }

    /// Name for a customer id, from the board's cached customer list.
    pub fn customer_name(&self, id: CustomerId) -> &str {
        resolve_customer_name(&self.customers, id)
    }

    pub fn jobs(&self) -> &[MovingJob] {
        &self.jobs
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form(&self) -> &JobForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut JobForm {
        &mut self.form
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// "Add Job" / "Cancel".
    pub fn toggle_form(&mut self) {
        self.form_open = !self.form_open;
    }
}
