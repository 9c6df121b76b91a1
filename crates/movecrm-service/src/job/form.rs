//! The add-job form and its mapping to a record draft.
//!
//! Input arrives as text, exactly as typed. Costs are parsed only when
//! non-empty, and the plain `YYYY-MM-DD` date becomes midnight UTC.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use movecrm_core::error::AppError;
use movecrm_core::types::CustomerId;
use movecrm_entity::{JobSize, JobStatus, NewMovingJob};

/// Why a job form could not become a record draft.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JobFormError {
    /// A required field was blank.
    #[error("{0} is required")]
    MissingField(&'static str),
    /// The customer reference is not an identifier.
    #[error("Invalid customer id: '{0}'")]
    InvalidCustomerId(String),
    /// The date is not `YYYY-MM-DD`.
    #[error("Invalid scheduled date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
    /// A cost field held something other than a finite number.
    #[error("Invalid {field}: '{value}' is not a number")]
    InvalidCost {
        /// Which cost field.
        field: &'static str,
        /// The offending input.
        value: String,
    },
    /// Unknown status text.
    #[error("Invalid status: '{0}'")]
    InvalidStatus(String),
    /// Unknown size text.
    #[error("Invalid job size: '{0}'")]
    InvalidSize(String),
}

impl From<JobFormError> for AppError {
    fn from(err: JobFormError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Raw add-job form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobForm {
    /// Identifier of the customer being moved.
    pub customer_id: String,
    /// Pick-up address.
    pub current_address: String,
    /// Drop-off address.
    pub destination_address: String,
    /// Move day, `YYYY-MM-DD`.
    pub scheduled_date: String,
    /// Status text; blank means the default.
    pub status: String,
    /// Size text; blank means the default.
    pub job_size: String,
    /// Special items.
    pub special_items: String,
    /// Quoted price.
    pub estimated_cost: String,
    /// Invoiced price.
    pub actual_cost: String,
    /// Free-form notes.
    pub notes: String,
}

impl Default for JobForm {
    fn default() -> Self {
        Self {
            customer_id: String::new(),
            current_address: String::new(),
            destination_address: String::new(),
            scheduled_date: String::new(),
            status: JobStatus::default().as_str().to_string(),
            job_size: JobSize::default().as_str().to_string(),
            special_items: String::new(),
            estimated_cost: String::new(),
            actual_cost: String::new(),
            notes: String::new(),
        }
    }
}

impl JobForm {
    /// Map the form onto a record draft.
    pub fn into_draft(&self) -> Result<NewMovingJob, JobFormError> {
        let customer_id = required(&self.customer_id, "Customer")?;
        let customer_id = customer_id
            .parse::<CustomerId>()
            .map_err(|_| JobFormError::InvalidCustomerId(customer_id.to_string()))?;

        let current_address = required(&self.current_address, "Current address")?;
        let destination_address = required(&self.destination_address, "Destination address")?;
        let scheduled_date = parse_date(required(&self.scheduled_date, "Scheduled date")?)?;

        let status = match self.status.trim() {
            "" => JobStatus::default(),
            s => s
                .parse()
                .map_err(|_| JobFormError::InvalidStatus(s.to_string()))?,
        };
        let job_size = match self.job_size.trim() {
            "" => JobSize::default(),
            s => s
                .parse()
                .map_err(|_| JobFormError::InvalidSize(s.to_string()))?,
        };

        Ok(NewMovingJob {
            customer_id,
            current_address: current_address.to_string(),
            destination_address: destination_address.to_string(),
            scheduled_date,
            status,
            job_size,
            special_items: optional(&self.special_items),
            estimated_cost: parse_cost(&self.estimated_cost, "estimated cost")?,
            actual_cost: parse_cost(&self.actual_cost, "actual cost")?,
            notes: optional(&self.notes),
        })
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, JobFormError> {
    match value.trim() {
        "" => Err(JobFormError::MissingField(field)),
        v => Ok(v),
    }
}

fn optional(value: &str) -> Option<String> {
    match value.trim() {
        "" => None,
        v => Some(v.to_string()),
    }
}

/// Plain calendar date to midnight UTC.
fn parse_date(value: &str) -> Result<DateTime<Utc>, JobFormError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| JobFormError::InvalidDate(value.to_string()))
}

/// Empty stays unset; anything else must be a finite number.
fn parse_cost(value: &str, field: &'static str) -> Result<Option<f64>, JobFormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(JobFormError::InvalidCost {
            field,
            value: value.to_string(),
        }),
    }
}
