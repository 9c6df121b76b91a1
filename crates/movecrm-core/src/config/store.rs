//! Record store selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which record store backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreProvider {
    /// In-process store; contents are lost on restart.
    #[default]
    Memory,
    /// PostgreSQL via the `database` section.
    Postgres,
}

impl fmt::Display for StoreProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Postgres => write!(f, "postgres"),
        }
    }
}

/// Record store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend provider.
    #[serde(default)]
    pub provider: StoreProvider,
    /// Run pending migrations when the postgres store is opened.
    #[serde(default)]
    pub auto_migrate: bool,
    /// Insert a sample customer and job when both collections are empty.
    #[serde(default)]
    pub seed_demo_data: bool,
}
