//! Stateful views driven by the interactive shell.
//!
//! Each board keeps its own fetched copy, form state, and loading flag.
//! Store failures are logged and swallowed: the prior data stays on screen,
//! a failed submit leaves the form open and filled. Boards subscribe to the
//! change feed and re-fetch on the next `show` once something they display
//! has changed.

mod customers;
mod dashboard;
mod jobs;
mod staleness;

pub use customers::CustomerBoard;
pub use dashboard::DashboardBoard;
pub use jobs::JobBoard;
pub use staleness::StaleTracker;

#[cfg(test)]
pub(crate) mod testing;
