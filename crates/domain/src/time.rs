//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `last_visited`, `saved_at`, event times, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse an `"HH:MM"` 24-hour string into minutes since midnight.
///
/// Returns `None` for anything that does not parse into two in-range
/// numeric components. Callers that must fail open on malformed data
/// (see [`SmartLaunchRule::is_active_at`](crate::rule::SmartLaunchRule::is_active_at))
/// handle the `None` themselves.
#[must_use]
pub fn parse_hhmm(value: &str) -> Option<u32> {
    let (hours, minutes) = value.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}
