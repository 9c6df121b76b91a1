//! Moving job records.

pub mod model;
pub mod size;
pub mod status;

pub use model::{MovingJob, MovingJobPatch, NewMovingJob};
pub use size::JobSize;
pub use status::JobStatus;
