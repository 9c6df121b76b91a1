//! Loads both collections and derives the dashboard.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::debug;

use movecrm_core::config::DashboardConfig;
use movecrm_core::error::AppError;
use movecrm_core::traits::RecordStore;
use movecrm_entity::{Customer, MovingJob};

use super::stats::DashboardSnapshot;

/// Builds dashboard snapshots.
#[derive(Debug, Clone)]
pub struct DashboardAggregator {
    customers: Arc<dyn RecordStore<Customer>>,
    jobs: Arc<dyn RecordStore<MovingJob>>,
    /// Upcoming window length in days.
    window_days: u32,
}

impl DashboardAggregator {
    /// Creates a new aggregator.
    pub fn new(
        customers: Arc<dyn RecordStore<Customer>>,
        jobs: Arc<dyn RecordStore<MovingJob>>,
        config: &DashboardConfig,
    ) -> Self {
        Self {
            customers,
            jobs,
            window_days: config.upcoming_window_days,
        }
    }

    /// Fetch both collections and derive a snapshot for today's local date.
    pub async fn load(&self) -> Result<DashboardSnapshot, AppError> {
        self.load_at(Local::now().date_naive()).await
    }

    /// Fetch both collections and derive a snapshot anchored at `today`.
    pub async fn load_at(&self, today: NaiveDate) -> Result<DashboardSnapshot, AppError> {
        let jobs = self.jobs.list().await?;
        let customers = self.customers.list().await?;
        debug!(
            jobs = jobs.len(),
            customers = customers.len(),
            %today,
            "Computing dashboard"
        );
        Ok(DashboardSnapshot::compute(
            &customers,
            &jobs,
            today,
            self.window_days,
        ))
    }

    /// Configured upcoming window.
    pub fn window_days(&self) -> u32 {
        self.window_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use movecrm_database::MemoryRecordStore;
    use movecrm_entity::JobStatus;

    use crate::context::RequestContext;
    use crate::customer::{CustomerForm, CustomerManager};
    use crate::feed::ChangeFeed;
    use crate::job::{JobForm, JobManager};

    struct Fixture {
        customers: CustomerManager,
        jobs: JobManager,
        dashboard: DashboardAggregator,
    }

    fn fixture() -> Fixture {
        let feed = ChangeFeed::default();
        let customer_store: Arc<dyn RecordStore<Customer>> =
            Arc::new(MemoryRecordStore::<Customer>::new());
        let job_store: Arc<dyn RecordStore<MovingJob>> =
            Arc::new(MemoryRecordStore::<MovingJob>::new());
        Fixture {
            customers: CustomerManager::new(customer_store.clone(), feed.clone()),
            jobs: JobManager::new(job_store.clone(), customer_store.clone(), feed),
            dashboard: DashboardAggregator::new(
                customer_store,
                job_store,
                &DashboardConfig::default(),
            ),
        }
    }

    #[tokio::test]
    async fn test_job_in_three_days_leaves_upcoming_when_cancelled() {
        let fx = fixture();
        let ctx = RequestContext::system("test");
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let customer = fx
            .customers
            .create(
                &ctx,
                CustomerForm {
                    name: "Jane Doe".to_string(),
                    email: "jane@x.com".to_string(),
                    phone: "555-0100".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let in_three = today.checked_add_days(Days::new(3)).unwrap();
        let job = fx
            .jobs
            .create(
                &ctx,
                &JobForm {
                    customer_id: customer.id.to_string(),
                    current_address: "1 Old Rd".to_string(),
                    destination_address: "2 New St".to_string(),
                    scheduled_date: in_three.format("%Y-%m-%d").to_string(),
                    status: String::new(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let snapshot = fx.dashboard.load_at(today).await.unwrap();
        assert_eq!(snapshot.upcoming.len(), 1);
        assert_eq!(snapshot.upcoming[0].customer_name, "Jane Doe");
        assert_eq!(snapshot.customer_count, 1);
        assert_eq!(snapshot.active_jobs, 1);

        fx.jobs
            .update_status(&ctx, job.id, JobStatus::Cancelled)
            .await
            .unwrap();
        let snapshot = fx.dashboard.load_at(today).await.unwrap();
        assert!(snapshot.upcoming.is_empty());
        assert_eq!(snapshot.active_jobs, 0);
    }

    #[tokio::test]
    async fn test_revenue_from_two_completed_jobs() {
        let fx = fixture();
        let ctx = RequestContext::system("test");
        for (actual, estimated) in [("100", "80"), ("", "50")] {
            let job = fx
                .jobs
                .create(
                    &ctx,
                    &JobForm {
                        customer_id: movecrm_core::types::CustomerId::new().to_string(),
                        current_address: "a".to_string(),
                        destination_address: "b".to_string(),
                        scheduled_date: "2026-09-01".to_string(),
                        actual_cost: actual.to_string(),
                        estimated_cost: estimated.to_string(),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
            fx.jobs
                .update_status(&ctx, job.id, JobStatus::Completed)
                .await
                .unwrap();
        }

        let snapshot = fx.dashboard.load().await.unwrap();
        assert_eq!(snapshot.revenue, 150.0);
        assert_eq!(snapshot.revenue_display, "$150.00");
        assert_eq!(snapshot.completed_jobs, 2);
    }
}
