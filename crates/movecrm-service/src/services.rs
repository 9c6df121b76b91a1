//! Wiring of managers over a set of record stores.

use tracing::info;

use movecrm_core::config::AppConfig;
use movecrm_core::error::AppError;
use movecrm_database::RecordStores;

use crate::board::{CustomerBoard, DashboardBoard, JobBoard};
use crate::customer::CustomerManager;
use crate::dashboard::DashboardAggregator;
use crate::feed::ChangeFeed;
use crate::job::JobManager;
use crate::seed::seed_demo_data;

/// All managers sharing one change feed.
#[derive(Debug, Clone)]
pub struct CrmServices {
    pub customers: CustomerManager,
    pub jobs: JobManager,
    pub dashboard: DashboardAggregator,
    pub feed: ChangeFeed,
}

impl CrmServices {
    /// Build managers over the given stores.
    pub fn new(stores: &RecordStores, config: &AppConfig) -> Self {
        let feed = ChangeFeed::default();
        Self {
            customers: CustomerManager::new(stores.customers.clone(), feed.clone()),
            jobs: JobManager::new(stores.jobs.clone(), stores.customers.clone(), feed.clone()),
            dashboard: DashboardAggregator::new(
                stores.customers.clone(),
                stores.jobs.clone(),
                &config.dashboard,
            ),
            feed,
        }
    }

    /// Build managers and seed demo data when configured to.
    pub async fn bootstrap(stores: &RecordStores, config: &AppConfig) -> Result<Self, AppError> {
        let services = Self::new(stores, config);
        if config.store.seed_demo_data {
            seed_demo_data(&services.customers, &services.jobs).await?;
        }
        info!(provider = %stores.provider(), "CRM services ready");
        Ok(services)
    }

    /// Fresh boards for the three tabs.
    pub fn boards(&self) -> (DashboardBoard, CustomerBoard, JobBoard) {
        (
            DashboardBoard::new(self.dashboard.clone(), &self.feed),
            CustomerBoard::new(self.customers.clone(), &self.feed),
            JobBoard::new(self.jobs.clone(), &self.feed),
        )
    }
}
