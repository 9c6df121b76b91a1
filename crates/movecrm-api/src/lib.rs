//! # movecrm-api
//!
//! HTTP API layer for MoveCRM built on Axum.
//!
//! Provides the REST endpoints for the dashboard, customers, and jobs
//! tabs, the sign-in gate, middleware (CORS, compression, logging),
//! extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
