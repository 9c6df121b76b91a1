//! `AuthUser` extractor: pulls the bearer token from the Authorization
//! header and resolves it through the sign-in gate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use movecrm_auth::StaffIdentity;
use movecrm_core::error::AppError;
use movecrm_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted signed-in staff member available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub StaffIdentity);

impl AuthUser {
    /// Context to hand to manager calls.
    pub fn context(&self) -> RequestContext {
        RequestContext::for_staff(&self.0)
    }
}

impl std::ops::Deref for AuthUser {
    type Target = StaffIdentity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let identity = state.auth.authenticate(token.trim())?;

        Ok(AuthUser(identity))
    }
}
