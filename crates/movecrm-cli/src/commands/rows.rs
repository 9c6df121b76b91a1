//! Table rows shared by the one-shot commands and the shell.

use serde::Serialize;
use tabled::Tabled;

use movecrm_entity::{Customer, MovingJob};
use movecrm_service::{UpcomingJob, format_currency, status_label};

fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or("-")
        .to_string()
}

fn money(value: Option<f64>) -> String {
    value.map(format_currency).unwrap_or_else(|| "-".to_string())
}

/// Customer display row
#[derive(Debug, Serialize, Tabled)]
pub struct CustomerRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Phone")]
    pub phone: String,
    #[tabled(rename = "Address")]
    pub address: String,
}

impl From<&Customer> for CustomerRow {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            address: or_dash(c.address.as_deref()),
        }
    }
}

/// Moving job display row
#[derive(Debug, Serialize, Tabled)]
pub struct JobRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Customer")]
    pub customer: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "From")]
    pub from: String,
    #[tabled(rename = "To")]
    pub to: String,
    #[tabled(rename = "Size")]
    pub size: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Estimate")]
    pub estimate: String,
    #[tabled(rename = "Actual")]
    pub actual: String,
}

impl JobRow {
    /// Build a row with the customer's resolved name.
    pub fn new(job: &MovingJob, customer_name: &str) -> Self {
        Self {
            id: job.id.to_string(),
            customer: customer_name.to_string(),
            date: job.scheduled_day().to_string(),
            from: job.current_address.clone(),
            to: job.destination_address.clone(),
            size: or_dash(job.job_size.as_ref().map(|s| s.as_str())),
            status: status_label(job.status).to_string(),
            estimate: money(job.estimated_cost),
            actual: money(job.actual_cost),
        }
    }
}

/// Upcoming job display row
#[derive(Debug, Serialize, Tabled)]
pub struct UpcomingRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Customer")]
    pub customer: String,
    #[tabled(rename = "Route")]
    pub route: String,
    #[tabled(rename = "Size")]
    pub size: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl From<&UpcomingJob> for UpcomingRow {
    fn from(u: &UpcomingJob) -> Self {
        Self {
            date: u.scheduled_date.to_string(),
            customer: u.customer_name.clone(),
            route: format!("{} → {}", u.current_address, u.destination_address),
            size: or_dash(u.job_size.as_ref().map(|s| s.as_str())),
            status: u.status_label.clone(),
        }
    }
}
