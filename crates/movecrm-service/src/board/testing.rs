//! A store wrapper whose calls can be made to fail on demand.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use movecrm_core::error::AppError;
use movecrm_core::result::AppResult;
use movecrm_core::traits::{Record, RecordStore};
use movecrm_database::MemoryRecordStore;

#[derive(Debug)]
pub(crate) struct FlakyStore<T: Record> {
    inner: MemoryRecordStore<T>,
    failing: AtomicBool,
    list_calls: AtomicUsize,
}

impl<T: Record> FlakyStore<T> {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryRecordStore::new(),
            failing: AtomicBool::new(false),
            list_calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of `list` calls so far, failed ones included.
    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(AppError::service_unavailable("store offline"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for FlakyStore<T> {
    async fn list(&self) -> AppResult<Vec<T>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.list().await
    }

    async fn create(&self, draft: T::Draft) -> AppResult<T> {
        self.check()?;
        self.inner.create(draft).await
    }

    async fn update(&self, id: T::Id, patch: T::Patch) -> AppResult<T> {
        self.check()?;
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: T::Id) -> AppResult<()> {
        self.check()?;
        self.inner.delete(id).await
    }
}
