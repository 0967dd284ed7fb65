//! JSON REST handlers for saved stops and groups.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use smartlaunch_app::ports::{RecentStore, RuleStore, SavedStore, StopSource};
use smartlaunch_domain::error::{NotFoundError, SmartLaunchError};
use smartlaunch_domain::id::{SavedItemId, StopId};
use smartlaunch_domain::saved::SavedItem;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for saving a stop or group.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveItemRequest {
    pub name: String,
    pub stop_ids: Vec<StopId>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<SavedItem>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<SavedItem>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/saved` — saved items, newest first.
pub async fn list<RS, VS, SS, SP>(
    State(state): State<AppState<RS, VS, SS, SP>>,
) -> Result<ListResponse, ApiError>
where
    RS: RuleStore + Send + Sync + 'static,
    VS: RecentStore + Send + Sync + 'static,
    SS: SavedStore + Send + Sync + 'static,
    SP: StopSource + Send + Sync + 'static,
{
    let saved = state.saved_service.list_saved().await?;
    Ok(ListResponse::Ok(Json(saved)))
}

/// `POST /api/saved` — save a named stop or group.
pub async fn create<RS, VS, SS, SP>(
    State(state): State<AppState<RS, VS, SS, SP>>,
    Json(req): Json<SaveItemRequest>,
) -> Result<CreateResponse, ApiError>
where
    RS: RuleStore + Send + Sync + 'static,
    VS: RecentStore + Send + Sync + 'static,
    SS: SavedStore + Send + Sync + 'static,
    SP: StopSource + Send + Sync + 'static,
{
    let item = state.saved_service.save_item(req.name, req.stop_ids).await?;
    Ok(CreateResponse::Created(Json(item)))
}

/// `DELETE /api/saved/{id}` — delete a saved item.
pub async fn delete<RS, VS, SS, SP>(
    State(state): State<AppState<RS, VS, SS, SP>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    RS: RuleStore + Send + Sync + 'static,
    VS: RecentStore + Send + Sync + 'static,
    SS: SavedStore + Send + Sync + 'static,
    SP: StopSource + Send + Sync + 'static,
{
    let item_id = SavedItemId::from_str(&id).map_err(|_| {
        ApiError::from(SmartLaunchError::from(NotFoundError {
            entity: "SavedItem",
            id: id.clone(),
        }))
    })?;
    state.saved_service.delete_item(item_id).await?;
    Ok(DeleteResponse::NoContent)
}
