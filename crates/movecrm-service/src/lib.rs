//! # movecrm-service
//!
//! The CRM's use cases. Managers wrap the record stores and publish change
//! events; the dashboard aggregator derives statistics from the two
//! collections; boards are the stateful views the interactive shell drives.
//!
//! Services follow constructor injection: stores and the change feed are
//! handed in as `Arc`s at construction time.

pub mod board;
pub mod context;
pub mod customer;
pub mod dashboard;
pub mod feed;
pub mod job;
pub mod names;
pub mod seed;
pub mod services;

pub use board::{CustomerBoard, DashboardBoard, JobBoard};
pub use context::RequestContext;
pub use customer::{CustomerForm, CustomerManager};
pub use dashboard::{
    DashboardAggregator, DashboardSnapshot, StatusCounts, UpcomingJob, format_currency, status_label,
};
pub use feed::ChangeFeed;
pub use job::{JobForm, JobFormError, JobManager, JobView};
pub use names::{UNKNOWN_CUSTOMER, resolve_customer_name};
pub use services::CrmServices;
