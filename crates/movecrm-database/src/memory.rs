//! In-process record store backed by a concurrent map.
//!
//! Used by the `memory` store provider and by tests. Contents vanish when
//! the process exits.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use movecrm_core::error::AppError;
use movecrm_core::result::AppResult;
use movecrm_core::traits::{Record, RecordStore};

/// A [`RecordStore`] that keeps every record in a [`DashMap`].
#[derive(Debug)]
pub struct MemoryRecordStore<T: Record> {
    /// Records keyed by identifier.
    records: DashMap<T::Id, T>,
}

impl<T: Record> MemoryRecordStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Create a store pre-filled with existing records.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let store = Self::new();
        for record in records {
            store.records.insert(record.id(), record);
        }
        store
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record> Default for MemoryRecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for MemoryRecordStore<T> {
    async fn list(&self) -> AppResult<Vec<T>> {
        let mut records: Vec<T> = self.records.iter().map(|r| r.value().clone()).collect();
        records.sort_by_key(|r| (r.created_at(), r.id()));
        Ok(records)
    }

    async fn create(&self, draft: T::Draft) -> AppResult<T> {
        // Id::default() yields a fresh random identifier.
        let mut id = T::Id::default();
        while self.records.contains_key(&id) {
            id = T::Id::default();
        }
        let record = T::from_draft(id, draft, Utc::now());
        self.records.insert(id, record.clone());
        debug!(kind = %T::KIND, id = %id, "Record created in memory store");
        Ok(record)
    }

    async fn update(&self, id: T::Id, patch: T::Patch) -> AppResult<T> {
        let mut entry = self
            .records
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("{} {id} not found", T::KIND)))?;
        entry.apply_patch(patch, Utc::now());
        Ok(entry.value().clone())
    }

    async fn delete(&self, id: T::Id) -> AppResult<()> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("{} {id} not found", T::KIND)))
    }
}
