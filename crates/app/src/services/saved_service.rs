//! Saved service — rider-named stops and stop groups.

use smartlaunch_domain::error::{NotFoundError, SmartLaunchError};
use smartlaunch_domain::id::{SavedItemId, StopId};
use smartlaunch_domain::saved::SavedItem;
use smartlaunch_domain::time::now;

use crate::ports::SavedStore;

/// Application service for saved stops and groups.
pub struct SavedService<S> {
    store: S,
}

impl<S: SavedStore> SavedService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List saved items, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_saved(&self) -> Result<Vec<SavedItem>, SmartLaunchError> {
        let mut saved = self.store.load().await?;
        saved.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(saved)
    }

    /// Save a named stop or group. Prepended so the newest item shows
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`SmartLaunchError::Validation`] for an empty name or stop
    /// list, or a storage error from the store.
    #[tracing::instrument(skip(self, name, stop_ids))]
    pub async fn save_item(
        &self,
        name: impl Into<String>,
        stop_ids: Vec<StopId>,
    ) -> Result<SavedItem, SmartLaunchError> {
        let item = SavedItem::new(name, stop_ids, now())?;
        let mut saved = self.store.load().await?;
        saved.insert(0, item.clone());
        self.store.save(&saved).await?;
        Ok(item)
    }

    /// Delete a saved item by id.
    ///
    /// # Errors
    ///
    /// Returns [`SmartLaunchError::NotFound`] when the id is unknown, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn delete_item(&self, id: SavedItemId) -> Result<(), SmartLaunchError> {
        let mut saved = self.store.load().await?;
        let before = saved.len();
        saved.retain(|item| item.id != id);
        if saved.len() == before {
            return Err(NotFoundError {
                entity: "SavedItem",
                id: id.to_string(),
            }
            .into());
        }
        self.store.save(&saved).await?;
        Ok(())
    }
}
