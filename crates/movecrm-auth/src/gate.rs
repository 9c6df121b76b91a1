//! The authentication gate: nothing in the CRM is reachable without a
//! live session.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use movecrm_core::config::AuthConfig;
use movecrm_core::error::AppError;
use movecrm_core::types::SessionId;

use crate::jwt::{JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;
use crate::session::{SessionRegistry, StaffSession};

/// The signed-in staff member behind a request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffIdentity {
    /// Login name.
    pub username: String,
    /// Name shown in the greeting.
    pub display_name: String,
    /// Session the identity was resolved from.
    pub session_id: SessionId,
    /// When the session's token expires.
    pub expires_at: DateTime<Utc>,
}

impl StaffIdentity {
    /// The header greeting, e.g. `Welcome, dispatch`.
    pub fn greeting(&self) -> String {
        format!("Welcome, {}", self.display_name)
    }
}

/// Result of a successful sign-in.
#[derive(Debug, Clone)]
pub struct SignedIn {
    /// Bearer token for subsequent requests.
    pub access_token: String,
    /// The identity the token resolves to.
    pub identity: StaffIdentity,
}

/// Checks credentials against configured staff accounts and tracks sessions.
#[derive(Debug, Clone)]
pub struct AuthGate {
    config: Arc<AuthConfig>,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    sessions: Arc<SessionRegistry>,
}

impl AuthGate {
    /// Build a gate over the given auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            config: Arc::new(config.clone()),
            hasher: PasswordHasher::new(),
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
            sessions: Arc::new(SessionRegistry::new()),
        }
    }

    /// Verify a username and password and open a session.
    ///
    /// Unknown users and wrong passwords produce the same error.
    pub fn sign_in(&self, username: &str, password: &str) -> Result<SignedIn, AppError> {
        let username = username.trim();
        let Some(account) = self.config.find_account(username) else {
            warn!(username = %username, "Sign-in attempt for unknown account");
            return Err(AppError::authentication("Invalid username or password"));
        };

        if !self
            .hasher
            .verify_password(password, &account.password_hash)?
        {
            warn!(username = %account.username, "Sign-in attempt with wrong password");
            return Err(AppError::authentication("Invalid username or password"));
        }

        let session_id = SessionId::new();
        let display_name = account.greeting_name().to_string();
        let (access_token, expires_at) =
            self.encoder
                .generate_access_token(&account.username, &display_name, session_id)?;

        self.sessions.register(StaffSession {
            id: session_id,
            username: account.username.clone(),
            created_at: Utc::now(),
            expires_at,
        });

        info!(username = %account.username, session_id = %session_id, "Staff signed in");

        Ok(SignedIn {
            access_token,
            identity: StaffIdentity {
                username: account.username.clone(),
                display_name,
                session_id,
                expires_at,
            },
        })
    }

    /// Resolve a bearer token to the staff member it belongs to.
    pub fn authenticate(&self, token: &str) -> Result<StaffIdentity, AppError> {
        let claims = self.decoder.decode_access_token(token)?;
        if self.sessions.get(claims.sid).is_none() {
            return Err(AppError::authentication("Session has ended"));
        }
        Ok(StaffIdentity {
            expires_at: claims.expires_at(),
            username: claims.sub,
            display_name: claims.name,
            session_id: claims.sid,
        })
    }

    /// End a session. Its token stops working immediately.
    pub fn sign_out(&self, identity: &StaffIdentity) {
        self.sessions.revoke(identity.session_id);
        info!(username = %identity.username, session_id = %identity.session_id, "Staff signed out");
    }

    /// The live session registry.
    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }
}
