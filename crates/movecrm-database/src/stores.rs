//! Store selection from configuration.

use std::sync::Arc;

use tracing::info;

use movecrm_core::config::{AppConfig, StoreProvider};
use movecrm_core::result::AppResult;
use movecrm_core::traits::RecordStore;
use movecrm_entity::{Customer, MovingJob};

use crate::connection::DatabasePool;
use crate::memory::MemoryRecordStore;
use crate::migration::run_migrations;
use crate::repositories::{CustomerRepository, MovingJobRepository};

/// The two record collections, behind trait objects so callers never see
/// which backend holds them.
#[derive(Debug, Clone)]
pub struct RecordStores {
    /// Customer collection.
    pub customers: Arc<dyn RecordStore<Customer>>,
    /// Moving job collection.
    pub jobs: Arc<dyn RecordStore<MovingJob>>,
    /// Pool for the postgres provider.
    pool: Option<DatabasePool>,
}

impl RecordStores {
    /// Open the stores named by `config.store.provider`.
    pub async fn open(config: &AppConfig) -> AppResult<Self> {
        match config.store.provider {
            StoreProvider::Memory => {
                info!("Using in-memory record store");
                Ok(Self::in_memory())
            }
            StoreProvider::Postgres => {
                let pool = DatabasePool::connect(&config.database).await?;
                if config.store.auto_migrate {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
        }
    }

    /// Fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::from_parts(
            Arc::new(MemoryRecordStore::<Customer>::new()),
            Arc::new(MemoryRecordStore::<MovingJob>::new()),
        )
    }

    /// PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        Self {
            customers: Arc::new(CustomerRepository::new(pool.pool().clone())),
            jobs: Arc::new(MovingJobRepository::new(pool.pool().clone())),
            pool: Some(pool),
        }
    }

    /// Wrap arbitrary store implementations.
    pub fn from_parts(
        customers: Arc<dyn RecordStore<Customer>>,
        jobs: Arc<dyn RecordStore<MovingJob>>,
    ) -> Self {
        Self {
            customers,
            jobs,
            pool: None,
        }
    }

    /// Which backend is in use.
    pub fn provider(&self) -> StoreProvider {
        if self.pool.is_some() {
            StoreProvider::Postgres
        } else {
            StoreProvider::Memory
        }
    }

    /// Check backend connectivity. Memory stores are always healthy.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
