//! The dashboard tab.

use tracing::error;

use movecrm_core::events::RecordKind;

use crate::dashboard::{DashboardAggregator, DashboardSnapshot};
use crate::feed::ChangeFeed;

use super::staleness::StaleTracker;

/// Holds the most recent dashboard snapshot.
#[derive(Debug)]
pub struct DashboardBoard {
    aggregator: DashboardAggregator,
    tracker: StaleTracker,
    loading: bool,
    snapshot: Option<DashboardSnapshot>,
}

impl DashboardBoard {
    /// Create a board subscribed to `feed`.
    pub fn new(aggregator: DashboardAggregator, feed: &ChangeFeed) -> Self {
        Self {
            aggregator,
            tracker: StaleTracker::new(
                feed.subscribe(),
                &[RecordKind::MovingJob, RecordKind::Customer],
            ),
            loading: false,
            snapshot: None,
        }
    }

    /// Bring the board up to date if any record changed.
    pub async fn show(&mut self) {
        if self.tracker.poll() {
            self.refresh().await;
        }
    }

    /// Reload both collections. On failure the previous snapshot stays.
    pub async fn refresh(&mut self) {
        self.tracker.clear();
        self.loading = true;
        match self.aggregator.load().await {
            Ok(snapshot) => self.snapshot = Some(snapshot),
            Err(e) => error!(error = %e, "Error loading dashboard data"),
        }
        self.loading = false;
    }

    /// Latest snapshot, if one has loaded.
    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
