//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use movecrm_auth::AuthGate;
use movecrm_core::config::AppConfig;
use movecrm_database::RecordStores;
use movecrm_service::{CrmServices, CustomerManager, DashboardAggregator, JobManager};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Record stores (memory or PostgreSQL)
    pub stores: RecordStores,
    /// Sign-in gate and session registry
    pub auth: Arc<AuthGate>,
    /// Customer manager
    pub customers: Arc<CustomerManager>,
    /// Moving job manager
    pub jobs: Arc<JobManager>,
    /// Dashboard aggregator
    pub dashboard: Arc<DashboardAggregator>,
    /// When the server started
    pub started_at: Instant,
}

impl AppState {
    /// Assemble state from configuration, stores, and wired services.
    pub fn new(config: AppConfig, stores: RecordStores, services: CrmServices) -> Self {
        Self {
            auth: Arc::new(AuthGate::new(&config.auth)),
            config: Arc::new(config),
            stores,
            customers: Arc::new(services.customers),
            jobs: Arc::new(services.jobs),
            dashboard: Arc::new(services.dashboard),
            started_at: Instant::now(),
        }
    }
}
