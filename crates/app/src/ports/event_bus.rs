//! Event bus port — publish/subscribe for launch events.

use std::future::Future;

use smartlaunch_domain::error::SmartLaunchError;
use smartlaunch_domain::event::LaunchEvent;

/// Publishes launch events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: LaunchEvent)
    -> impl Future<Output = Result<(), SmartLaunchError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(
        &self,
        event: LaunchEvent,
    ) -> impl Future<Output = Result<(), SmartLaunchError>> + Send {
        (**self).publish(event)
    }
}
