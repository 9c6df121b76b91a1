//! Dashboard handler.

use axum::Json;
use axum::extract::State;

use movecrm_service::DashboardSnapshot;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<DashboardSnapshot>>, ApiError> {
    let snapshot = state.dashboard.load().await?;
    Ok(Json(ApiResponse::ok(snapshot)))
}
