//! Moving job use cases.

pub mod form;
pub mod service;

pub use form::{JobForm, JobFormError};
pub use service::{JobManager, JobView};
