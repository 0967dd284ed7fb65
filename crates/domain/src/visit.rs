//! Recent visit — an entry in the rider's recently-viewed-stops list.
//!
//! The list is newest-first, deduplicated by stop id, and capped at
//! [`RECENT_LIMIT`] entries. Stored with the camelCase field names the
//! original rider app used.

use serde::{Deserialize, Serialize};

use crate::id::StopId;
use crate::time::Timestamp;

/// Maximum number of recent stops kept.
pub const RECENT_LIMIT: usize = 10;

/// A recently visited stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentStop {
    pub stop_id: StopId,
    /// Display name captured at visit time.
    pub name: String,
    pub last_visited: Timestamp,
}

/// Insert a visit at the front of the list, dropping any older entry for
/// the same stop and truncating to [`RECENT_LIMIT`].
#[must_use]
pub fn push_visit(mut recent: Vec<RecentStop>, visit: RecentStop) -> Vec<RecentStop> {
    recent.retain(|entry| entry.stop_id != visit.stop_id);
    recent.insert(0, visit);
    recent.truncate(RECENT_LIMIT);
    recent
}
