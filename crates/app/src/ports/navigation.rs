//! Navigation port — page transition to a stop's detail view.

use std::future::Future;

use smartlaunch_domain::error::SmartLaunchError;
use smartlaunch_domain::id::StopId;

/// Performs the page transition when a launch fires.
pub trait NavigationSink {
    /// Navigate to the detail view of the given stop.
    fn go_to(&self, stop_id: &StopId) -> impl Future<Output = Result<(), SmartLaunchError>> + Send;
}

impl<T: NavigationSink + Send + Sync> NavigationSink for std::sync::Arc<T> {
    fn go_to(&self, stop_id: &StopId) -> impl Future<Output = Result<(), SmartLaunchError>> + Send {
        (**self).go_to(stop_id)
    }
}
