//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field has a serde default so a missing file still
//! yields a runnable development setup.

pub mod app;
pub mod auth;
pub mod dashboard;
pub mod database;
pub mod logging;
pub mod store;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, StaffAccount};
pub use self::dashboard::DashboardConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::store::{StoreConfig, StoreProvider};

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "MOVECRM";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// configuration (`config/default.toml`, the selected file, and
/// `MOVECRM__`-prefixed environment variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings (used by the postgres store).
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Record store selection.
    #[serde(default)]
    pub store: StoreConfig,
    /// Authentication settings and staff accounts.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Dashboard aggregation settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// Merges `config/default.toml` (if present), the given file (if
    /// present), and environment variables prefixed with `MOVECRM__`
    /// (e.g. `MOVECRM__SERVER__PORT=9000`).
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Look up a staff account by username (case-insensitive).
    pub fn find_account(&self, username: &str) -> Option<&StaffAccount> {
        self.auth.find_account(username)
    }
}
