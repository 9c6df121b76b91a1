//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
    /// Staff accounts allowed to sign in.
    #[serde(default)]
    pub accounts: Vec<StaffAccount>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_access_ttl_minutes: default_access_ttl(),
            accounts: Vec::new(),
        }
    }
}

impl AuthConfig {
    /// Look up a staff account by username (case-insensitive).
    pub fn find_account(&self, username: &str) -> Option<&StaffAccount> {
        self.accounts
            .iter()
            .find(|a| a.username.eq_ignore_ascii_case(username))
    }
}

/// A staff member who may sign in to the CRM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffAccount {
    /// Login name.
    pub username: String,
    /// Name shown in the greeting; falls back to the username.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Argon2 PHC-format password hash (see `movecrm hash-password`).
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl StaffAccount {
    /// The name to greet this account with.
    pub fn greeting_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    480
}
