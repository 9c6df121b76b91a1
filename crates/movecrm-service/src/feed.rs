//! Change feed: a broadcast of record mutations.

use tokio::sync::broadcast;
use tracing::debug;

use movecrm_core::events::RecordEvent;

/// Default number of events buffered per subscriber.
pub const DEFAULT_CAPACITY: usize = 256;

/// Publishes [`RecordEvent`]s to every subscribed board.
///
/// Publishing never fails: with no subscribers the event is dropped.
/// A subscriber that falls behind sees `Lagged` and must assume
/// everything it holds is stale.
#[derive(Debug, Clone)]
pub struct ChangeFeed {
    sender: broadcast::Sender<RecordEvent>,
}

impl ChangeFeed {
    /// Create a feed with the given per-subscriber buffer.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish an event.
    pub fn publish(&self, event: RecordEvent) {
        debug!(kind = %event.kind, record_id = %event.record_id, change = ?event.change, "Publishing change");
        let _ = self.sender.send(event);
    }

    /// Subscribe to future events.
    pub fn subscribe(&self) -> broadcast::Receiver<RecordEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
