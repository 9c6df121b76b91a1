//! # movecrm-entity
//!
//! Record models for MoveCRM. Every struct in this crate represents a
//! record-store row or the field set used to create or patch one. Stored
//! records derive `sqlx::FromRow` and implement
//! [`movecrm_core::traits::Record`].

pub mod customer;
pub mod job;

pub use customer::{Customer, CustomerPatch, NewCustomer};
pub use job::{JobSize, JobStatus, MovingJob, MovingJobPatch, NewMovingJob};
