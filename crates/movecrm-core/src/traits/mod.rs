//! Core traits defined in `movecrm-core` and implemented by other crates.

pub mod record_store;

pub use record_store::{Record, RecordStore};
