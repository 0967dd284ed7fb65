//! JSON REST handlers for the static stops dataset.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use smartlaunch_app::ports::{RecentStore, RuleStore, SavedStore, StopSource};
use smartlaunch_domain::error::{NotFoundError, SmartLaunchError};
use smartlaunch_domain::geo::Point;
use smartlaunch_domain::id::StopId;
use smartlaunch_domain::stop::Stop;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the nearby search.
#[derive(Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lon: f64,
    /// Search radius in meters.
    pub radius: f64,
}

/// Possible responses from the list and nearby endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Stop>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Stop>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/stops` — the full stops dataset.
pub async fn list<RS, VS, SS, SP>(
    State(state): State<AppState<RS, VS, SS, SP>>,
) -> Result<ListResponse, ApiError>
where
    RS: RuleStore + Send + Sync + 'static,
    VS: RecentStore + Send + Sync + 'static,
    SS: SavedStore + Send + Sync + 'static,
    SP: StopSource + Send + Sync + 'static,
{
    let stops = state.stop_catalog.all().await?.to_vec();
    Ok(ListResponse::Ok(Json(stops)))
}

/// `GET /api/stops/{id}` — one stop by id.
pub async fn get<RS, VS, SS, SP>(
    State(state): State<AppState<RS, VS, SS, SP>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    RS: RuleStore + Send + Sync + 'static,
    VS: RecentStore + Send + Sync + 'static,
    SS: SavedStore + Send + Sync + 'static,
    SP: StopSource + Send + Sync + 'static,
{
    let stop_id = StopId::new(id);
    let stop = state.stop_catalog.get(&stop_id).await?.cloned();
    match stop {
        Some(stop) => Ok(GetResponse::Ok(Json(stop))),
        None => Err(ApiError::from(SmartLaunchError::from(NotFoundError {
            entity: "Stop",
            id: stop_id.to_string(),
        }))),
    }
}

/// `GET /api/stops/nearby?lat=&lon=&radius=` — stops within a radius of a
/// point, nearest first.
pub async fn nearby<RS, VS, SS, SP>(
    State(state): State<AppState<RS, VS, SS, SP>>,
    Query(query): Query<NearbyQuery>,
) -> Result<ListResponse, ApiError>
where
    RS: RuleStore + Send + Sync + 'static,
    VS: RecentStore + Send + Sync + 'static,
    SS: SavedStore + Send + Sync + 'static,
    SP: StopSource + Send + Sync + 'static,
{
    let origin = Point::new(query.lat, query.lon);
    let stops = state
        .stop_catalog
        .nearby(origin, query.radius)
        .await?
        .into_iter()
        .cloned()
        .collect();
    Ok(ListResponse::Ok(Json(stops)))
}
