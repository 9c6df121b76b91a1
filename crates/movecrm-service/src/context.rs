//! Request context carrying the acting staff member.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use movecrm_auth::StaffIdentity;
use movecrm_core::types::SessionId;

/// Who is performing an operation.
///
/// Passed into every mutating manager call so the audit log line names the
/// staff member behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Staff username, or the tool name for unattended use.
    pub username: String,
    /// The session the request arrived on, if any.
    pub session_id: Option<SessionId>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Context for a signed-in staff member.
    pub fn for_staff(identity: &StaffIdentity) -> Self {
        Self {
            username: identity.username.clone(),
            session_id: Some(identity.session_id),
            request_time: Utc::now(),
        }
    }

    /// Context for local tooling that runs without a session.
    pub fn system(actor: &str) -> Self {
        Self {
            username: actor.to_string(),
            session_id: None,
            request_time: Utc::now(),
        }
    }
}
