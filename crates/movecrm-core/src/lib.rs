//! # movecrm-core
//!
//! Core crate for MoveCRM. Contains the record-store traits, configuration
//! schemas, typed identifiers, change events, and the unified error system.
//!
//! This crate has **no** internal dependencies on other MoveCRM crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
