//! Change events emitted after successful record mutations.
//!
//! Events travel over the change feed and tell stateful views which of
//! their fetched copies went stale.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The collections held by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// `Customer` records.
    Customer,
    /// `MovingJob` records.
    MovingJob,
}

impl RecordKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::MovingJob => "moving_job",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What happened to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// The record was created.
    Created,
    /// The record was partially updated.
    Updated,
    /// The record was deleted.
    Deleted,
}

/// A single record mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the mutation completed.
    pub timestamp: DateTime<Utc>,
    /// Collection touched.
    pub kind: RecordKind,
    /// The affected record's identifier.
    pub record_id: Uuid,
    /// Mutation type.
    pub change: ChangeKind,
}

impl RecordEvent {
    /// Create a new record event stamped with the current time.
    pub fn new(kind: RecordKind, record_id: impl Into<Uuid>, change: ChangeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind,
            record_id: record_id.into(),
            change,
        }
    }
}
