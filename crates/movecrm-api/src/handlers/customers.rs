//! Customer handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use movecrm_core::types::CustomerId;
use movecrm_entity::Customer;
use movecrm_service::CustomerForm;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, JsonBody, parse_id};
use crate::state::AppState;

/// GET /api/customers
pub async fn list_customers(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Customer>>>, ApiError> {
    let customers = state.customers.list().await?;
    Ok(Json(ApiResponse::ok(customers)))
}

/// POST /api/customers
pub async fn create_customer(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(form): JsonBody<CustomerForm>,
) -> Result<(StatusCode, Json<ApiResponse<Customer>>), ApiError> {
    let customer = state.customers.create(&auth.context(), form).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(customer))))
}

/// DELETE /api/customers/{id}
pub async fn delete_customer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id: CustomerId = parse_id(&id)?;
    state.customers.delete(&auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Customer deleted"))))
}
