//! Storage ports — whole-list persistence for the three rider-local lists.
//!
//! The backing store keeps each list as a single opaque document under a
//! fixed storage key; there are no partial updates. A missing or corrupt
//! document reads back as an empty list.

use std::future::Future;

use smartlaunch_domain::error::SmartLaunchError;
use smartlaunch_domain::rule::SmartLaunchRule;
use smartlaunch_domain::saved::SavedItem;
use smartlaunch_domain::visit::RecentStop;

/// Persistence for the SmartLaunch rule list.
pub trait RuleStore {
    /// Load the full rule list.
    fn load(&self) -> impl Future<Output = Result<Vec<SmartLaunchRule>, SmartLaunchError>> + Send;

    /// Replace the full rule list.
    fn save(
        &self,
        rules: &[SmartLaunchRule],
    ) -> impl Future<Output = Result<(), SmartLaunchError>> + Send;
}

/// Persistence for the recently-visited-stops list.
pub trait RecentStore {
    /// Load the full recent list.
    fn load(&self) -> impl Future<Output = Result<Vec<RecentStop>, SmartLaunchError>> + Send;

    /// Replace the full recent list.
    fn save(
        &self,
        recent: &[RecentStop],
    ) -> impl Future<Output = Result<(), SmartLaunchError>> + Send;
}

/// Persistence for the saved stops/groups list.
pub trait SavedStore {
    /// Load the full saved list.
    fn load(&self) -> impl Future<Output = Result<Vec<SavedItem>, SmartLaunchError>> + Send;

    /// Replace the full saved list.
    fn save(&self, saved: &[SavedItem])
    -> impl Future<Output = Result<(), SmartLaunchError>> + Send;
}

impl<T: RuleStore + Send + Sync> RuleStore for std::sync::Arc<T> {
    fn load(&self) -> impl Future<Output = Result<Vec<SmartLaunchRule>, SmartLaunchError>> + Send {
        (**self).load()
    }

    fn save(
        &self,
        rules: &[SmartLaunchRule],
    ) -> impl Future<Output = Result<(), SmartLaunchError>> + Send {
        (**self).save(rules)
    }
}
