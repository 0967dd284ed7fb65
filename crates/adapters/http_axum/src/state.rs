//! Shared application state for axum handlers.

use std::sync::Arc;

use smartlaunch_app::ports::{RecentStore, RuleStore, SavedStore, StopSource};
use smartlaunch_app::services::recent_service::RecentService;
use smartlaunch_app::services::rule_service::RuleService;
use smartlaunch_app::services::saved_service::SavedService;
use smartlaunch_app::services::stop_catalog::StopCatalog;

/// Application state shared across all axum handlers.
///
/// Generic over the store and stop-source types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do
/// not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<RS, VS, SS, SP> {
    /// SmartLaunch rule CRUD service.
    pub rule_service: Arc<RuleService<RS>>,
    /// Recently-visited-stops service.
    pub recent_service: Arc<RecentService<VS>>,
    /// Saved stops and groups service.
    pub saved_service: Arc<SavedService<SS>>,
    /// Cached static stops dataset.
    pub stop_catalog: Arc<StopCatalog<SP>>,
}

impl<RS, VS, SS, SP> Clone for AppState<RS, VS, SS, SP> {
    fn clone(&self) -> Self {
        Self {
            rule_service: Arc::clone(&self.rule_service),
            recent_service: Arc::clone(&self.recent_service),
            saved_service: Arc::clone(&self.saved_service),
            stop_catalog: Arc::clone(&self.stop_catalog),
        }
    }
}

impl<RS, VS, SS, SP> AppState<RS, VS, SS, SP>
where
    RS: RuleStore + Send + Sync + 'static,
    VS: RecentStore + Send + Sync + 'static,
    SS: SavedStore + Send + Sync + 'static,
    SP: StopSource + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        rule_service: RuleService<RS>,
        recent_service: RecentService<VS>,
        saved_service: SavedService<SS>,
        stop_catalog: StopCatalog<SP>,
    ) -> Self {
        Self {
            rule_service: Arc::new(rule_service),
            recent_service: Arc::new(recent_service),
            saved_service: Arc::new(saved_service),
            stop_catalog: Arc::new(stop_catalog),
        }
    }
}
