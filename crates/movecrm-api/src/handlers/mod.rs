//! Route handlers organized by tab.

pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod health;
pub mod jobs;
