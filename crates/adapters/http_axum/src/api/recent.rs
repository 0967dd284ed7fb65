//! JSON REST handlers for the recently-visited-stops history.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use smartlaunch_app::ports::{RecentStore, RuleStore, SavedStore, StopSource};
use smartlaunch_domain::id::StopId;
use smartlaunch_domain::visit::RecentStop;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for recording a visit.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordVisitRequest {
    pub stop_id: StopId,
    pub name: String,
}

/// Possible responses from the list and record endpoints. Both return the
/// full history so the caller can refresh its view in one round trip.
pub enum ListResponse {
    Ok(Json<Vec<RecentStop>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/recent` — recent visits, newest first.
pub async fn list<RS, VS, SS, SP>(
    State(state): State<AppState<RS, VS, SS, SP>>,
) -> Result<ListResponse, ApiError>
where
    RS: RuleStore + Send + Sync + 'static,
    VS: RecentStore + Send + Sync + 'static,
    SS: SavedStore + Send + Sync + 'static,
    SP: StopSource + Send + Sync + 'static,
{
    let recent = state.recent_service.list_recent().await?;
    Ok(ListResponse::Ok(Json(recent)))
}

/// `POST /api/recent` — record a stop visit.
pub async fn record<RS, VS, SS, SP>(
    State(state): State<AppState<RS, VS, SS, SP>>,
    Json(req): Json<RecordVisitRequest>,
) -> Result<ListResponse, ApiError>
where
    RS: RuleStore + Send + Sync + 'static,
    VS: RecentStore + Send + Sync + 'static,
    SS: SavedStore + Send + Sync + 'static,
    SP: StopSource + Send + Sync + 'static,
{
    let recent = state
        .recent_service
        .record_visit(req.stop_id, req.name)
        .await?;
    Ok(ListResponse::Ok(Json(recent)))
}
