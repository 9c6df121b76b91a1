//! Session tracking.

pub mod registry;

pub use registry::{SessionRegistry, StaffSession};
