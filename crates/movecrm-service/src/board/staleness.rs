//! Tracks whether a board's fetched copy is out of date.

use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::TryRecvError;

use movecrm_core::events::{RecordEvent, RecordKind};

/// Watches the change feed for events touching the given kinds.
#[derive(Debug)]
pub struct StaleTracker {
    rx: Receiver<RecordEvent>,
    watches: &'static [RecordKind],
    stale: bool,
}

impl StaleTracker {
    /// Start out stale so the first `show` fetches.
    pub fn new(rx: Receiver<RecordEvent>, watches: &'static [RecordKind]) -> Self {
        Self {
            rx,
            watches,
            stale: true,
        }
    }

    /// Drain pending events and report whether a re-fetch is due.
    pub fn poll(&mut self) -> bool {
        loop {
            match self.rx.try_recv() {
                Ok(event) if self.watches.contains(&event.kind) => self.stale = true,
                Ok(_) => {}
                Err(TryRecvError::Lagged(_)) => self.stale = true,
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        self.stale
    }

    /// Forget pending events; called right before a fetch.
    pub fn clear(&mut self) {
        self.poll();
        self.stale = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::ChangeFeed;
    use movecrm_core::events::ChangeKind;
    use uuid::Uuid;

    #[test]
    fn test_only_watched_kinds_mark_stale() {
        let feed = ChangeFeed::default();
        let mut tracker = StaleTracker::new(feed.subscribe(), &[RecordKind::Customer]);
        assert!(tracker.poll());
        tracker.clear();
        assert!(!tracker.poll());

        feed.publish(RecordEvent::new(RecordKind::MovingJob, Uuid::new_v4(), ChangeKind::Created));
        assert!(!tracker.poll());

        feed.publish(RecordEvent::new(RecordKind::Customer, Uuid::new_v4(), ChangeKind::Deleted));
        assert!(tracker.poll());
    }

    #[test]
    fn test_lagging_marks_stale() {
        let feed = ChangeFeed::new(1);
        let mut tracker = StaleTracker::new(feed.subscribe(), &[RecordKind::Customer]);
        tracker.clear();
        for _ in 0..3 {
            feed.publish(RecordEvent::new(RecordKind::MovingJob, Uuid::new_v4(), ChangeKind::Created));
        }
        assert!(tracker.poll());
    }
}
