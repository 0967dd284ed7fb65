//! Stop source port — the static stops dataset.

use std::future::Future;

use smartlaunch_domain::error::SmartLaunchError;
use smartlaunch_domain::stop::Stop;

/// Loads the agency's stops dataset.
pub trait StopSource {
    /// Load all stops. Rows the source cannot parse are skipped, not fatal.
    fn load_stops(&self) -> impl Future<Output = Result<Vec<Stop>, SmartLaunchError>> + Send;
}
