//! Moving job handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use movecrm_core::types::MovingJobId;
use movecrm_entity::{JobStatus, MovingJob};
use movecrm_service::{JobForm, JobView};

use crate::dto::request::StatusUpdateRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, JsonBody, parse_id};
use crate::state::AppState;

/// GET /api/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<JobView>>>, ApiError> {
    let rows = state.jobs.list_with_names().await?;
    Ok(Json(ApiResponse::ok(rows)))
}

/// POST /api/jobs
pub async fn create_job(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(form): JsonBody<JobForm>,
) -> Result<(StatusCode, Json<ApiResponse<MovingJob>>), ApiError> {
    let job = state.jobs.create(&auth.context(), &form).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(job))))
}

/// PATCH /api/jobs/{id}/status
pub async fn update_job_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<StatusUpdateRequest>,
) -> Result<Json<ApiResponse<MovingJob>>, ApiError> {
    let id: MovingJobId = parse_id(&id)?;
    let status: JobStatus = req.status.parse()?;
    let job = state.jobs.update_status(&auth.context(), id, status).await?;
    Ok(Json(ApiResponse::ok(job)))
}

/// DELETE /api/jobs/{id}
pub async fn delete_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id: MovingJobId = parse_id(&id)?;
    state.jobs.delete(&auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Job deleted"))))
}
