//! Dashboard statistics.

pub mod service;
pub mod stats;

pub use service::DashboardAggregator;
pub use stats::{DashboardSnapshot, StatusCounts, UpcomingJob, format_currency, status_label};
