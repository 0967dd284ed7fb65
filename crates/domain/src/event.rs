//! Launch event — an immutable record of a rule match and its outcome.

use serde::{Deserialize, Serialize};

use crate::id::{EventId, RuleId, StopId};
use crate::time::{Timestamp, now};

/// What happened during a launch check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchEventKind {
    /// A rule matched the current fix and time; the notice was shown.
    RuleMatched,
    /// The notice delay elapsed and navigation was performed.
    NavigationCompleted,
    /// The rider (or a page teardown) canceled the pending navigation.
    NavigationCanceled,
}

/// A record of something the launch engine did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchEvent {
    pub id: EventId,
    pub kind: LaunchEventKind,
    pub rule_id: RuleId,
    pub stop_id: StopId,
    pub timestamp: Timestamp,
}

impl LaunchEvent {
    /// Create an event stamped with the current time.
    #[must_use]
    pub fn new(kind: LaunchEventKind, rule_id: RuleId, stop_id: StopId) -> Self {
        Self {
            id: EventId::new(),
            kind,
            rule_id,
            stop_id,
            timestamp: now(),
        }
    }
}
