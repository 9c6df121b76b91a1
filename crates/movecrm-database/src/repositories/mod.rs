//! PostgreSQL record stores.

pub mod customer;
pub mod moving_job;

pub use customer::CustomerRepository;
pub use moving_job::MovingJobRepository;
