//! Auth handlers: login, logout, me.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use movecrm_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, SessionResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid login request: {e}")))?;

    let signed_in = state.auth.sign_in(&req.username, &req.password)?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        user: SessionResponse::from(&signed_in.identity),
        access_token: signed_in.access_token,
    })))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.auth.sign_out(&auth);
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Signed out successfully",
    ))))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<ApiResponse<SessionResponse>> {
    Json(ApiResponse::ok(SessionResponse::from(&*auth)))
}
