//! Recent service — the recently-visited-stops list.

use smartlaunch_domain::error::SmartLaunchError;
use smartlaunch_domain::id::StopId;
use smartlaunch_domain::time::now;
use smartlaunch_domain::visit::{RecentStop, push_visit};

use crate::ports::RecentStore;

/// Application service for the recent-stops history.
pub struct RecentService<S> {
    store: S,
}

impl<S: RecentStore> RecentService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List recent visits, newest first.
    ///
    /// The list is re-sorted defensively on read; stored data may predate
    /// the ordering guarantee.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_recent(&self) -> Result<Vec<RecentStop>, SmartLaunchError> {
        let mut recent = self.store.load().await?;
        recent.sort_by(|a, b| b.last_visited.cmp(&a.last_visited));
        Ok(recent)
    }

    /// Record a visit to a stop.
    ///
    /// Deduplicates by stop id, prepends, truncates to the limit, and
    /// persists the whole list.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    #[tracing::instrument(skip(self, name))]
    pub async fn record_visit(
        &self,
        stop_id: StopId,
        name: impl Into<String>,
    ) -> Result<Vec<RecentStop>, SmartLaunchError> {
        let recent = self.store.load().await?;
        let recent = push_visit(
            recent,
            RecentStop {
                stop_id,
                name: name.into(),
                last_visited: now(),
            },
        );
        self.store.save(&recent).await?;
        Ok(recent)
    }
}
