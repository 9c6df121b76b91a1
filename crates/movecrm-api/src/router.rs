//! Route definitions for the MoveCRM HTTP API.
//!
//! Routes are grouped by tab and mounted under `/api`. Every handler
//! receives `AppState` through Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, patch, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with all routes and request logging.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(dashboard_routes())
        .merge(customer_routes())
        .merge(job_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Sign-in gate: login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(handlers::dashboard::dashboard))
}

/// Customer list, add, delete
fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/customers",
            get(handlers::customers::list_customers).post(handlers::customers::create_customer),
        )
        .route("/customers/{id}", delete(handlers::customers::delete_customer))
}

/// Job list, add, status change, delete
fn job_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/jobs",
            get(handlers::jobs::list_jobs).post(handlers::jobs::create_job),
        )
        .route("/jobs/{id}", delete(handlers::jobs::delete_job))
        .route("/jobs/{id}/status", patch(handlers::jobs::update_job_status))
}

/// Health check (public)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
