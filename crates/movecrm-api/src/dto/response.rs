//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use movecrm_auth::StaffIdentity;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime.
    pub uptime_seconds: u64,
    /// Record store backend.
    pub store: String,
}

/// The signed-in staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Login name.
    pub username: String,
    /// Name shown in the greeting.
    pub display_name: String,
    /// Header greeting text.
    pub greeting: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
}

impl From<&StaffIdentity> for SessionResponse {
    fn from(identity: &StaffIdentity) -> Self {
        Self {
            username: identity.username.clone(),
            display_name: identity.display_name.clone(),
            greeting: identity.greeting(),
            expires_at: identity.expires_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token.
    pub access_token: String,
    /// Who signed in.
    pub user: SessionResponse,
}
