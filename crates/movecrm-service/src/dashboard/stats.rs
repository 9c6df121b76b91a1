//! Pure dashboard derivations over fetched collections.
//!
//! Nothing here touches a store; the same inputs and clock reading always
//! give the same snapshot.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use movecrm_core::types::MovingJobId;
use movecrm_entity::{Customer, JobSize, JobStatus, MovingJob};

use crate::names::resolve_customer_name;

/// Number of jobs per status. Jobs without a status are in no bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct StatusCounts {
    pub scheduled: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    /// Tally the jobs.
    pub fn tally(jobs: &[MovingJob]) -> Self {
        let mut counts = Self::default();
        for status in jobs.iter().filter_map(|j| j.status) {
            match status {
                JobStatus::Scheduled => counts.scheduled += 1,
                JobStatus::InProgress => counts.in_progress += 1,
                JobStatus::Completed => counts.completed += 1,
                JobStatus::Cancelled => counts.cancelled += 1,
            }
        }
        counts
    }

    /// Count for one status.
    pub fn get(&self, status: JobStatus) -> usize {
        match status {
            JobStatus::Scheduled => self.scheduled,
            JobStatus::InProgress => self.in_progress,
            JobStatus::Completed => self.completed,
            JobStatus::Cancelled => self.cancelled,
        }
    }

    /// Scheduled plus in progress.
    pub fn active(&self) -> usize {
        self.scheduled + self.in_progress
    }

    /// Sum of all four buckets.
    pub fn total(&self) -> usize {
        self.scheduled + self.in_progress + self.completed + self.cancelled
    }
}

/// Jobs whose move day falls in `[today, today + window_days]` and that
/// carry a status other than cancelled. Input order is kept.
pub fn upcoming_jobs(jobs: &[MovingJob], today: NaiveDate, window_days: u32) -> Vec<&MovingJob> {
    let last_day = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);
    jobs.iter()
        .filter(|job| match job.status {
            Some(status) => status != JobStatus::Cancelled,
            None => false,
        })
        .filter(|job| {
            let day = job.scheduled_day();
            day >= today && day <= last_day
        })
        .collect()
}

/// Sum over completed jobs of actual cost, else estimate, else zero.
pub fn revenue(jobs: &[MovingJob]) -> f64 {
    jobs.iter()
        .filter(|job| job.has_status(JobStatus::Completed))
        .map(MovingJob::billable_amount)
        .sum()
}

/// Money with two decimals, e.g. `$150.00`.
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Display label for an optional status.
pub fn status_label(status: Option<JobStatus>) -> &'static str {
    status.map(|s| s.label()).unwrap_or("Unknown")
}

/// One row of the upcoming-jobs table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingJob {
    pub id: MovingJobId,
    pub scheduled_date: NaiveDate,
    pub customer_name: String,
    pub current_address: String,
    pub destination_address: String,
    pub job_size: Option<JobSize>,
    pub status: Option<JobStatus>,
    pub status_label: String,
}

/// Everything the dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// The date the upcoming window was anchored to.
    pub today: NaiveDate,
    /// Length of the upcoming window in days.
    pub window_days: u32,
    pub customer_count: usize,
    pub status_counts: StatusCounts,
    pub active_jobs: usize,
    pub completed_jobs: usize,
    pub revenue: f64,
    /// `revenue` formatted for display.
    pub revenue_display: String,
    pub upcoming: Vec<UpcomingJob>,
}

impl DashboardSnapshot {
    /// Derive the snapshot from the two collections.
    pub fn compute(
        customers: &[Customer],
        jobs: &[MovingJob],
        today: NaiveDate,
        window_days: u32,
    ) -> Self {
        let status_counts = StatusCounts::tally(jobs);
        let revenue = revenue(jobs);
        let upcoming = upcoming_jobs(jobs, today, window_days)
            .into_iter()
            .map(|job| UpcomingJob {
                id: job.id,
                scheduled_date: job.scheduled_day(),
                customer_name: resolve_customer_name(customers, job.customer_id).to_string(),
                current_address: job.current_address.clone(),
                destination_address: job.destination_address.clone(),
                job_size: job.job_size,
                status: job.status,
                status_label: status_label(job.status).to_string(),
            })
            .collect();

        Self {
            today,
            window_days,
            customer_count: customers.len(),
            status_counts,
            active_jobs: status_counts.active(),
            completed_jobs: status_counts.completed,
            revenue,
            revenue_display: format_currency(revenue),
            upcoming,
        }
    }
}
