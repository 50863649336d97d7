//! Dashboards: thin CRUD controllers over the catalog.
//!
//! Each dashboard holds a snapshot of the movie list. The snapshot is a
//! fresh copy of whatever the service returned last: every mutation is
//! followed by a full re-fetch, there is no optimistic local edit, and
//! when refreshes race the last one to complete simply overwrites the
//! list. Errors are returned to the caller for display as transient
//! in-view text; the dashboard stays usable and the action can be
//! retried.
//!
//! A background refresh started with `spawn_refresh` is tied to a
//! [`RefreshHandle`]; dropping the handle (the view unmounting) aborts
//! the in-flight request instead of letting it write into a dead view.

mod admin;
mod user;

pub use admin::AdminDashboard;
pub use user::UserDashboard;

use tokio::task::JoinHandle;

/// Handle to a background refresh. Aborts the refresh when dropped.
pub struct RefreshHandle {
    handle: JoinHandle<()>,
}

impl RefreshHandle {
    pub(crate) fn new(handle: JoinHandle<()>) -> Self {
        Self { handle }
    }

    /// Waits for the refresh to finish.
    pub async fn wait(mut self) {
        let _ = (&mut self.handle).await;
    }

    /// Returns true once the refresh has completed or been aborted.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
