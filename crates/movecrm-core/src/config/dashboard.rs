//! Dashboard configuration.

use serde::{Deserialize, Serialize};

/// Settings for the dashboard aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Length of the upcoming-jobs window in days (inclusive of today).
    #[serde(default = "default_upcoming_window")]
    pub upcoming_window_days: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            upcoming_window_days: default_upcoming_window(),
        }
    }
}

fn default_upcoming_window() -> u32 {
    7
}
