//! Saved item — a rider-named stop or stop group.

use serde::{Deserialize, Serialize};

use crate::error::{SmartLaunchError, ValidationError};
use crate::id::{SavedItemId, StopId};
use crate::time::Timestamp;

/// A saved stop or stop group. Groups hold more than one stop and are
/// opened with the first stop as the primary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub id: SavedItemId,
    /// Rider-chosen label.
    pub name: String,
    pub stop_ids: Vec<StopId>,
    pub is_group: bool,
    pub saved_at: Timestamp,
}

impl SavedItem {
    /// Create a saved item named by the rider.
    ///
    /// `is_group` is derived from the number of stops.
    ///
    /// # Errors
    ///
    /// Returns [`SmartLaunchError::Validation`] when the name is empty or
    /// the stop list is empty.
    pub fn new(
        name: impl Into<String>,
        stop_ids: Vec<StopId>,
        saved_at: Timestamp,
    ) -> Result<Self, SmartLaunchError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if stop_ids.is_empty() {
            return Err(ValidationError::EmptyStopId.into());
        }
        let is_group = stop_ids.len() > 1;
        Ok(Self {
            id: SavedItemId::new(),
            name,
            stop_ids,
            is_group,
            saved_at,
        })
    }

    /// The stop opened first when the item is selected.
    #[must_use]
    pub fn primary_stop(&self) -> &StopId {
        &self.stop_ids[0]
    }
}
