//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod recent;
#[allow(clippy::missing_errors_doc)]
pub mod rules;
#[allow(clippy::missing_errors_doc)]
pub mod saved;
#[allow(clippy::missing_errors_doc)]
pub mod stops;

use axum::Router;
use axum::routing::{delete, get, post};

use smartlaunch_app::ports::{RecentStore, RuleStore, SavedStore, StopSource};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<RS, VS, SS, SP>() -> Router<AppState<RS, VS, SS, SP>>
where
    RS: RuleStore + Send + Sync + 'static,
    VS: RecentStore + Send + Sync + 'static,
    SS: SavedStore + Send + Sync + 'static,
    SP: StopSource + Send + Sync + 'static,
{
    Router::new()
        // Rules
        .route(
            "/rules",
            get(rules::list::<RS, VS, SS, SP>).post(rules::create::<RS, VS, SS, SP>),
        )
        .route(
            "/rules/{id}",
            get(rules::get::<RS, VS, SS, SP>)
                .put(rules::update::<RS, VS, SS, SP>)
                .delete(rules::delete::<RS, VS, SS, SP>),
        )
        .route("/rules/{id}/toggle", post(rules::toggle::<RS, VS, SS, SP>))
        .route(
            "/rules/{id}/geofence",
            get(rules::geofence::<RS, VS, SS, SP>),
        )
        // Recent visits
        .route(
            "/recent",
            get(recent::list::<RS, VS, SS, SP>).post(recent::record::<RS, VS, SS, SP>),
        )
        // Saved stops and groups
        .route(
            "/saved",
            get(saved::list::<RS, VS, SS, SP>).post(saved::create::<RS, VS, SS, SP>),
        )
        .route("/saved/{id}", delete(saved::delete::<RS, VS, SS, SP>))
        // Static stops dataset
        .route("/stops", get(stops::list::<RS, VS, SS, SP>))
        .route("/stops/nearby", get(stops::nearby::<RS, VS, SS, SP>))
        .route("/stops/{id}", get(stops::get::<RS, VS, SS, SP>))
}
