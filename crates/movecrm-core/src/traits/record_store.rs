//! The record store contract shared by every backend.

use std::fmt;
use std::hash::Hash;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::events::RecordKind;
use crate::result::AppResult;

/// A record type the store knows how to hold.
///
/// `Draft` is the field set accepted by `create`, `Patch` the partial field
/// set accepted by `update`. The store assigns the identifier and the
/// timestamps.
pub trait Record: Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static {
    /// Identifier type.
    type Id: Copy
        + Eq
        + Hash
        + Ord
        + Default
        + fmt::Display
        + fmt::Debug
        + Into<Uuid>
        + Send
        + Sync
        + 'static;
    /// Fields accepted on creation.
    type Draft: Clone + fmt::Debug + Send + Sync + 'static;
    /// Fields accepted on partial update; `None` leaves a field untouched.
    type Patch: Clone + fmt::Debug + Default + Send + Sync + 'static;

    /// Which collection this record belongs to.
    const KIND: RecordKind;

    /// The record's identifier.
    fn id(&self) -> Self::Id;

    /// When the store created the record.
    fn created_at(&self) -> DateTime<Utc>;

    /// Materialise a new record from a draft.
    fn from_draft(id: Self::Id, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Apply a partial update in place and bump `updated_at`.
    fn apply_patch(&mut self, patch: Self::Patch, now: DateTime<Utc>);
}

/// CRUD collection API for one record type.
///
/// Every operation may fail; failures carry an [`crate::AppError`] whose
/// kind is the only classification callers get.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync + fmt::Debug + 'static {
    /// List every record, oldest first.
    async fn list(&self) -> AppResult<Vec<T>>;

    /// Create a record and return it with its assigned identifier.
    async fn create(&self, draft: T::Draft) -> AppResult<T>;

    /// Apply a partial update to an existing record and return the result.
    async fn update(&self, id: T::Id, patch: T::Patch) -> AppResult<T>;

    /// Delete a record by identifier.
    async fn delete(&self, id: T::Id) -> AppResult<()>;
}
