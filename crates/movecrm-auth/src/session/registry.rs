//! In-process registry of live staff sessions.
//!
//! A token is only honoured while its session is registered here, so
//! removing the entry revokes the token before it expires. Sessions do not
//! survive a restart; staff simply sign in again.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use movecrm_core::types::SessionId;

/// One signed-in staff member.
#[derive(Debug, Clone)]
pub struct StaffSession {
    /// Session identifier carried in the token's `sid` claim.
    pub id: SessionId,
    /// Staff username.
    pub username: String,
    /// When the session was opened.
    pub created_at: DateTime<Utc>,
    /// When the session's token expires.
    pub expires_at: DateTime<Utc>,
}

impl StaffSession {
    /// Whether the session has passed its expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Concurrent map of live sessions.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<SessionId, StaffSession>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new session.
    pub fn register(&self, session: StaffSession) {
        debug!(session_id = %session.id, username = %session.username, "Session registered");
        self.sessions.insert(session.id, session);
    }

    /// Look up a live session. Expired entries are dropped on sight.
    pub fn get(&self, id: SessionId) -> Option<StaffSession> {
        let now = Utc::now();
        let session = self.sessions.get(&id).map(|s| s.value().clone())?;
        if session.is_expired(now) {
            self.sessions.remove(&id);
            return None;
        }
        Some(session)
    }

    /// Remove a session. Returns whether it was present.
    pub fn revoke(&self, id: SessionId) -> bool {
        let removed = self.sessions.remove(&id).is_some();
        debug!(session_id = %id, removed, "Session revoked");
        removed
    }

    /// Drop every expired session and return how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, s| !s.is_expired(now));
        before - self.sessions.len()
    }

    /// Number of registered sessions.
    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }
}
