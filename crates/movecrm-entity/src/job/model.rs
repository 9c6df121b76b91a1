//! Moving job entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use movecrm_core::events::RecordKind;
use movecrm_core::traits::Record;
use movecrm_core::types::{CustomerId, MovingJobId};

use super::size::JobSize;
use super::status::JobStatus;

/// One scheduled move.
///
/// `customer_id` is not checked against the customer collection; a job may
/// outlive its customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MovingJob {
    /// Store-assigned identifier.
    pub id: MovingJobId,
    /// The customer being moved.
    pub customer_id: CustomerId,
    /// Pick-up address.
    pub current_address: String,
    /// Drop-off address.
    pub destination_address: String,
    /// Move day, stored as midnight UTC.
    pub scheduled_date: DateTime<Utc>,
    /// Current status. Older rows may lack one.
    pub status: Option<JobStatus>,
    /// Size estimate. Older rows may lack one.
    pub job_size: Option<JobSize>,
    /// Pianos, safes, artwork...
    pub special_items: Option<String>,
    /// Quoted price.
    pub estimated_cost: Option<f64>,
    /// Invoiced price.
    pub actual_cost: Option<f64>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl MovingJob {
    /// Calendar day of the move.
    pub fn scheduled_day(&self) -> NaiveDate {
        self.scheduled_date.date_naive()
    }

    /// Whether the job has exactly the given status.
    pub fn has_status(&self, status: JobStatus) -> bool {
        self.status == Some(status)
    }

    /// Amount the job brings in: actual cost, else the estimate, else zero.
    /// A zero cost counts as missing, so an actual of 0 falls back to the estimate.
    pub fn billable_amount(&self) -> f64 {
        let nonzero = |cost: &f64| *cost != 0.0;
        self.actual_cost
            .filter(nonzero)
            .or(self.estimated_cost.filter(nonzero))
            .unwrap_or(0.0)
    }
}

/// Data required to create a new moving job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovingJob {
    /// The customer being moved.
    pub customer_id: CustomerId,
    /// Pick-up address.
    pub current_address: String,
    /// Drop-off address.
    pub destination_address: String,
    /// Move day as a timestamp.
    pub scheduled_date: DateTime<Utc>,
    /// Initial status.
    #[serde(default)]
    pub status: JobStatus,
    /// Size estimate.
    #[serde(default)]
    pub job_size: JobSize,
    /// Special items.
    pub special_items: Option<String>,
    /// Quoted price.
    pub estimated_cost: Option<f64>,
    /// Invoiced price.
    pub actual_cost: Option<f64>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Partial update for a moving job. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovingJobPatch {
    /// New customer reference.
    pub customer_id: Option<CustomerId>,
    /// New pick-up address.
    pub current_address: Option<String>,
    /// New drop-off address.
    pub destination_address: Option<String>,
    /// New move day.
    pub scheduled_date: Option<DateTime<Utc>>,
    /// New status.
    pub status: Option<JobStatus>,
    /// New size.
    pub job_size: Option<JobSize>,
    /// New special items.
    pub special_items: Option<String>,
    /// New quote.
    pub estimated_cost: Option<f64>,
    /// New invoiced price.
    pub actual_cost: Option<f64>,
    /// New notes.
    pub notes: Option<String>,
}

impl MovingJobPatch {
    /// A patch that only changes the status.
    pub fn status(status: JobStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

impl Record for MovingJob {
    type Id = MovingJobId;
    type Draft = NewMovingJob;
    type Patch = MovingJobPatch;

    const KIND: RecordKind = RecordKind::MovingJob;

    fn id(&self) -> MovingJobId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: MovingJobId, draft: NewMovingJob, now: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_id: draft.customer_id,
            current_address: draft.current_address,
            destination_address: draft.destination_address,
            scheduled_date: draft.scheduled_date,
            status: Some(draft.status),
            job_size: Some(draft.job_size),
            special_items: draft.special_items,
            estimated_cost: draft.estimated_cost,
            actual_cost: draft.actual_cost,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: MovingJobPatch, now: DateTime<Utc>) {
        if let Some(customer_id) = patch.customer_id {
            self.customer_id = customer_id;
        }
        if let Some(current_address) = patch.current_address {
            self.current_address = current_address;
        }
        if let Some(destination_address) = patch.destination_address {
            self.destination_address = destination_address;
        }
        if let Some(scheduled_date) = patch.scheduled_date {
            self.scheduled_date = scheduled_date;
        }
        if patch.status.is_some() {
            self.status = patch.status;
        }
        if patch.job_size.is_some() {
            self.job_size = patch.job_size;
        }
        if patch.special_items.is_some() {
            self.special_items = patch.special_items;
        }
        if patch.estimated_cost.is_some() {
            self.estimated_cost = patch.estimated_cost;
        }
        if patch.actual_cost.is_some() {
            self.actual_cost = patch.actual_cost;
        }
        if patch.notes.is_some() {
            self.notes = patch.notes;
        }
        self.updated_at = now;
    }
}
