//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use smartlaunch_app::ports::{RecentStore, RuleStore, SavedStore, StopSource};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the JSON API under `/api` and a `/health` probe at the root.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<RS, VS, SS, SP>(state: AppState<RS, VS, SS, SP>) -> Router
where
    RS: RuleStore + Send + Sync + 'static,
    VS: RecentStore + Send + Sync + 'static,
    SS: SavedStore + Send + Sync + 'static,
    SP: StopSource + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use smartlaunch_app::services::recent_service::RecentService;
    use smartlaunch_app::services::rule_service::RuleService;
    use smartlaunch_app::services::saved_service::SavedService;
    use smartlaunch_app::services::stop_catalog::StopCatalog;
    use smartlaunch_domain::error::SmartLaunchError;
    use smartlaunch_domain::id::StopId;
    use smartlaunch_domain::rule::SmartLaunchRule;
    use smartlaunch_domain::saved::SavedItem;
    use smartlaunch_domain::stop::Stop;
    use smartlaunch_domain::visit::RecentStop;

    #[derive(Default)]
    struct MemRuleStore(Mutex<Vec<SmartLaunchRule>>);

    impl RuleStore for MemRuleStore {
        async fn load(&self) -> Result<Vec<SmartLaunchRule>, SmartLaunchError> {
            Ok(self.0.lock().unwrap().clone())
        }
        async fn save(&self, rules: &[SmartLaunchRule]) -> Result<(), SmartLaunchError> {
            *self.0.lock().unwrap() = rules.to_vec();
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemRecentStore(Mutex<Vec<RecentStop>>);

    impl RecentStore for MemRecentStore {
        async fn load(&self) -> Result<Vec<RecentStop>, SmartLaunchError> {
            Ok(self.0.lock().unwrap().clone())
        }
        async fn save(&self, recent: &[RecentStop]) -> Result<(), SmartLaunchError> {
            *self.0.lock().unwrap() = recent.to_vec();
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemSavedStore(Mutex<Vec<SavedItem>>);

    impl SavedStore for MemSavedStore {
        async fn load(&self) -> Result<Vec<SavedItem>, SmartLaunchError> {
            Ok(self.0.lock().unwrap().clone())
        }
        async fn save(&self, saved: &[SavedItem]) -> Result<(), SmartLaunchError> {
            *self.0.lock().unwrap() = saved.to_vec();
            Ok(())
        }
    }

    struct StubStopSource;

    impl StopSource for StubStopSource {
        async fn load_stops(&self) -> Result<Vec<Stop>, SmartLaunchError> {
            Ok(vec![Stop {
                stop_id: StopId::new("10070"),
                name: "W Johnson at East Campus".to_string(),
                lat: 43.0731,
                lon: -89.4012,
            }])
        }
    }

    fn test_app() -> Router {
        build(AppState::new(
            RuleService::new(MemRuleStore::default()),
            RecentService::new(MemRecentStore::default()),
            SavedService::new(MemSavedStore::default()),
            StopCatalog::new(StubStopSource),
        ))
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_app().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_create_and_list_rules() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/rules",
                serde_json::json!({
                    "stopId": "10070",
                    "center": { "lat": 43.0731, "lon": -89.4012 },
                    "radiusMeters": 200.0,
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["name"], "SmartLaunch for stop 10070");
        assert_eq!(created["enabled"], true);

        let response = app.oneshot(get_request("/api/rules")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let rules = body_json(response).await;
        assert_eq!(rules.as_array().unwrap().len(), 1);
        assert_eq!(rules[0]["stopId"], "10070");
    }

    #[tokio::test]
    async fn should_reject_rule_with_bad_radius() {
        let response = test_app()
            .oneshot(json_request(
                "POST",
                "/api/rules",
                serde_json::json!({
                    "stopId": "10070",
                    "center": { "lat": 43.0731, "lon": -89.4012 },
                    "radiusMeters": -5.0,
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_rule() {
        let uuid = uuid::Uuid::new_v4();
        let response = test_app()
            .oneshot(get_request(&format!("/api/rules/{uuid}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unparsable_rule_id() {
        let response = test_app()
            .oneshot(get_request("/api/rules/not-a-uuid"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_toggle_rule_enabled_flag() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/rules",
                serde_json::json!({
                    "stopId": "10070",
                    "center": { "lat": 43.0731, "lon": -89.4012 },
                    "radiusMeters": 200.0,
                }),
            ))
            .await
            .unwrap();
        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(json_request(
                "POST",
                &format!("/api/rules/{id}/toggle"),
                serde_json::json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let toggled = body_json(response).await;
        assert_eq!(toggled["enabled"], false);
    }

    #[tokio::test]
    async fn should_record_and_list_recent_visits() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/recent",
                serde_json::json!({ "stopId": "10070", "name": "W Johnson" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get_request("/api/recent")).await.unwrap();
        let recent = body_json(response).await;
        assert_eq!(recent[0]["stopId"], "10070");
    }

    #[tokio::test]
    async fn should_save_and_delete_saved_items() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/saved",
                serde_json::json!({ "name": "Commute", "stopIds": ["1", "2"] }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let item = body_json(response).await;
        assert_eq!(item["isGroup"], true);
        let id = item["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/saved/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn should_serve_stops_from_the_catalog() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(get_request("/api/stops/10070"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let stop = body_json(response).await;
        assert_eq!(stop["name"], "W Johnson at East Campus");

        let response = app
            .oneshot(get_request(
                "/api/stops/nearby?lat=43.0731&lon=-89.4012&radius=500",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let nearby = body_json(response).await;
        assert_eq!(nearby.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_serve_geofence_polygon_for_a_rule() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/rules",
                serde_json::json!({
                    "stopId": "10070",
                    "center": { "lat": 43.0731, "lon": -89.4012 },
                    "radiusMeters": 200.0,
                }),
            ))
            .await
            .unwrap();
        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(get_request(&format!("/api/rules/{id}/geofence")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let geofence = body_json(response).await;
        // Closed 64-segment ring.
        assert_eq!(geofence["polygon"].as_array().unwrap().len(), 65);
    }
}
