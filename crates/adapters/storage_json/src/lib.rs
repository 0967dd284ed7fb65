//! # smartlaunch-adapter-storage-json
//!
//! Whole-list JSON document storage. Each persisted list lives in one
//! file under a data directory, named after the storage key the original
//! rider app used in `localStorage`. Writes replace the whole document
//! (temp file + rename); there are no partial updates.
//!
//! A missing document reads back as an empty list. A corrupt document
//! also reads back as an empty list — the rider app reset on parse
//! failure rather than breaking the page — with a warning logged.
//!
//! ## Dependency rule
//! Depends on `smartlaunch-app` (port traits) and `smartlaunch-domain` only.

mod document;

use std::path::{Path, PathBuf};

use smartlaunch_app::ports::{RecentStore, RuleStore, SavedStore};
use smartlaunch_domain::error::SmartLaunchError;
use smartlaunch_domain::rule::SmartLaunchRule;
use smartlaunch_domain::saved::SavedItem;
use smartlaunch_domain::visit::RecentStop;

/// Storage key for the SmartLaunch rule list.
pub const RULES_KEY: &str = "bt_smartlaunch_rules";
/// Storage key for the recently-visited-stops list.
pub const RECENT_KEY: &str = "bt_recent_stops";
/// Storage key for the saved stops/groups list.
pub const SAVED_KEY: &str = "bt_saved_stops";

fn key_path(data_dir: &Path, key: &str) -> PathBuf {
    data_dir.join(format!("{key}.json"))
}

/// File-backed [`RuleStore`] under the `bt_smartlaunch_rules` key.
pub struct JsonRuleStore {
    path: PathBuf,
}

impl JsonRuleStore {
    /// Create a store rooted at the given data directory.
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: key_path(data_dir.as_ref(), RULES_KEY),
        }
    }
}

impl RuleStore for JsonRuleStore {
    async fn load(&self) -> Result<Vec<SmartLaunchRule>, SmartLaunchError> {
        document::load_list(&self.path).await
    }

    async fn save(&self, rules: &[SmartLaunchRule]) -> Result<(), SmartLaunchError> {
        document::save_list(&self.path, rules).await
    }
}

/// File-backed [`RecentStore`] under the `bt_recent_stops` key.
pub struct JsonRecentStore {
    path: PathBuf,
}

impl JsonRecentStore {
    /// Create a store rooted at the given data directory.
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: key_path(data_dir.as_ref(), RECENT_KEY),
        }
    }
}

impl RecentStore for JsonRecentStore {
    async fn load(&self) -> Result<Vec<RecentStop>, SmartLaunchError> {
        document::load_list(&self.path).await
    }

    async fn save(&self, recent: &[RecentStop]) -> Result<(), SmartLaunchError> {
        document::save_list(&self.path, recent).await
    }
}

/// File-backed [`SavedStore`] under the `bt_saved_stops` key.
pub struct JsonSavedStore {
    path: PathBuf,
}

impl JsonSavedStore {
    /// Create a store rooted at the given data directory.
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: key_path(data_dir.as_ref(), SAVED_KEY),
        }
    }
}

impl SavedStore for JsonSavedStore {
    async fn load(&self) -> Result<Vec<SavedItem>, SmartLaunchError> {
        document::load_list(&self.path).await
    }

    async fn save(&self, saved: &[SavedItem]) -> Result<(), SmartLaunchError> {
        document::save_list(&self.path, saved).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartlaunch_domain::geo::Point;
    use smartlaunch_domain::id::StopId;
    use smartlaunch_domain::time::now;

    fn campus_rule(stop_id: &str) -> SmartLaunchRule {
        SmartLaunchRule::builder()
            .stop_id(stop_id)
            .center(Point::new(43.0731, -89.4012))
            .radius_meters(200.0)
            .window("07:00", "12:00")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_empty_list_when_document_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonRuleStore::new(dir.path());
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_roundtrip_rule_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonRuleStore::new(dir.path());

        let rules = vec![campus_rule("A"), campus_rule("B")];
        store.save(&rules).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, rules[0].id);
        assert_eq!(loaded[0].stop_id.as_str(), "A");
        assert_eq!(loaded[1].stop_id.as_str(), "B");
    }

    #[tokio::test]
    async fn should_replace_the_whole_list_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonRuleStore::new(dir.path());

        store
            .save(&[campus_rule("A"), campus_rule("B")])
            .await
            .unwrap();
        store.save(&[campus_rule("C")]).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].stop_id.as_str(), "C");
    }

    #[tokio::test]
    async fn should_treat_corrupt_document_as_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = key_path(dir.path(), RULES_KEY);
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let store = JsonRuleStore::new(dir.path());
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_read_documents_written_by_the_rider_app() {
        // camelCase field names and no `enabled` field, as the browser
        // app stored them.
        let dir = tempfile::tempdir().unwrap();
        let path = key_path(dir.path(), RULES_KEY);
        let json = serde_json::json!([{
            "id": uuid::Uuid::new_v4(),
            "name": "SmartLaunch for stop 10070",
            "stopId": "10070",
            "center": { "lat": 43.0731, "lon": -89.4012 },
            "radiusMeters": 150.0,
            "startTime": "07:00",
            "endTime": "12:00"
        }]);
        tokio::fs::write(&path, serde_json::to_vec(&json).unwrap())
            .await
            .unwrap();

        let store = JsonRuleStore::new(dir.path());
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].enabled);
        assert_eq!(loaded[0].stop_id.as_str(), "10070");
    }

    #[tokio::test]
    async fn should_keep_stores_under_separate_keys() {
        let dir = tempfile::tempdir().unwrap();
        let rules = JsonRuleStore::new(dir.path());
        let recent = JsonRecentStore::new(dir.path());
        let saved = JsonSavedStore::new(dir.path());

        rules.save(&[campus_rule("A")]).await.unwrap();
        recent
            .save(&[RecentStop {
                stop_id: StopId::new("1"),
                name: "Stop 1".to_string(),
                last_visited: now(),
            }])
            .await
            .unwrap();
        saved
            .save(&[SavedItem::new("Home", vec![StopId::new("1")], now()).unwrap()])
            .await
            .unwrap();

        assert_eq!(rules.load().await.unwrap().len(), 1);
        assert_eq!(recent.load().await.unwrap().len(), 1);
        assert_eq!(saved.load().await.unwrap().len(), 1);
    }
}
