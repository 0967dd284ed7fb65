//! JSON REST handlers for SmartLaunch rules.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use smartlaunch_app::ports::{RecentStore, RuleStore, SavedStore, StopSource};
use smartlaunch_domain::error::{NotFoundError, SmartLaunchError};
use smartlaunch_domain::geo::{self, Point};
use smartlaunch_domain::id::{RuleId, StopId};
use smartlaunch_domain::rule::SmartLaunchRule;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a rule.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRuleRequest {
    pub stop_id: StopId,
    pub name: Option<String>,
    pub center: Point,
    pub radius_meters: f64,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub enabled: Option<bool>,
}

/// Request body for updating a rule. Full replacement.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRuleRequest {
    pub stop_id: StopId,
    pub name: Option<String>,
    pub center: Point,
    pub radius_meters: f64,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub enabled: bool,
}

/// Geofence rendering payload for a single rule.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeofenceResponse {
    pub center: Point,
    pub radius_meters: f64,
    /// Closed polygon ring approximating the circle, for map overlays.
    pub polygon: Vec<Point>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<SmartLaunchRule>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get, update, and toggle endpoints.
pub enum GetResponse {
    Ok(Json<SmartLaunchRule>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<SmartLaunchRule>),
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

/// An unparsable id cannot name any stored rule.
fn parse_rule_id(raw: &str) -> Result<RuleId, ApiError> {
    RuleId::from_str(raw).map_err(|_| {
        ApiError::from(SmartLaunchError::from(NotFoundError {
            entity: "SmartLaunchRule",
            id: raw.to_string(),
        }))
    })
}

fn build_rule(req: CreateRuleRequest) -> Result<SmartLaunchRule, ApiError> {
    let mut builder = SmartLaunchRule::builder()
        .stop_id(req.stop_id)
        .center(req.center)
        .radius_meters(req.radius_meters);

    if let Some(name) = req.name {
        builder = builder.name(name);
    }
    if let (Some(start), Some(end)) = (req.start_time, req.end_time) {
        builder = builder.window(start, end);
    }
    if let Some(enabled) = req.enabled {
        builder = builder.enabled(enabled);
    }

    Ok(builder.build()?)
}

/// `GET /api/rules` — list all rules in stored order.
pub async fn list<RS, VS, SS, SP>(
    State(state): State<AppState<RS, VS, SS, SP>>,
) -> Result<ListResponse, ApiError>
where
    RS: RuleStore + Send + Sync + 'static,
    VS: RecentStore + Send + Sync + 'static,
    SS: SavedStore + Send + Sync + 'static,
    SP: StopSource + Send + Sync + 'static,
{
    let rules = state.rule_service.list_rules().await?;
    Ok(ListResponse::Ok(Json(rules)))
}

/// `GET /api/rules/{id}` — get a rule by id.
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
    let rule_id = parse_rule_id(&id)?;
    let rule = state.rule_service.get_rule(rule_id).await?;
    Ok(GetResponse::Ok(Json(rule)))
}

/// `POST /api/rules` — create a new rule.
pub async fn create<RS, VS, SS, SP>(
    State(state): State<AppState<RS, VS, SS, SP>>,
    Json(req): Json<CreateRuleRequest>,
) -> Result<CreateResponse, ApiError>
where
    RS: RuleStore + Send + Sync + 'static,
    VS: RecentStore + Send + Sync + 'static,
    SS: SavedStore + Send + Sync + 'static,
    SP: StopSource + Send + Sync + 'static,
{
    let rule = build_rule(req)?;
    let created = state.rule_service.create_rule(rule).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/rules/{id}` — replace an existing rule.
pub async fn update<RS, VS, SS, SP>(
    State(state): State<AppState<RS, VS, SS, SP>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRuleRequest>,
) -> Result<GetResponse, ApiError>
where
    RS: RuleStore + Send + Sync + 'static,
    VS: RecentStore + Send + Sync + 'static,
    SS: SavedStore + Send + Sync + 'static,
    SP: StopSource + Send + Sync + 'static,
{
    let rule_id = parse_rule_id(&id)?;

    let mut builder = SmartLaunchRule::builder()
        .id(rule_id)
        .stop_id(req.stop_id)
        .center(req.center)
        .radius_meters(req.radius_meters)
        .enabled(req.enabled);

    if let Some(name) = req.name {
        builder = builder.name(name);
    }
    if let (Some(start), Some(end)) = (req.start_time, req.end_time) {
        builder = builder.window(start, end);
    }

    let rule = builder.build()?;
    let updated = state.rule_service.update_rule(rule).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `POST /api/rules/{id}/toggle` — flip a rule's enabled flag.
pub async fn toggle<RS, VS, SS, SP>(
    State(state): State<AppState<RS, VS, SS, SP>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    RS: RuleStore + Send + Sync + 'static,
    VS: RecentStore + Send + Sync + 'static,
    SS: SavedStore + Send + Sync + 'static,
    SP: StopSource + Send + Sync + 'static,
{
    let rule_id = parse_rule_id(&id)?;
    let toggled = state.rule_service.toggle_enabled(rule_id).await?;
    Ok(GetResponse::Ok(Json(toggled)))
}

/// `DELETE /api/rules/{id}` — delete a rule.
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
    let rule_id = parse_rule_id(&id)?;
    state.rule_service.delete_rule(rule_id).await?;
    Ok(DeleteResponse::NoContent)
}

/// `GET /api/rules/{id}/geofence` — polygon ring for drawing the rule's
/// geofence on a map.
pub async fn geofence<RS, VS, SS, SP>(
    State(state): State<AppState<RS, VS, SS, SP>>,
    Path(id): Path<String>,
) -> Result<Json<GeofenceResponse>, ApiError>
where
    RS: RuleStore + Send + Sync + 'static,
    VS: RecentStore + Send + Sync + 'static,
    SS: SavedStore + Send + Sync + 'static,
    SP: StopSource + Send + Sync + 'static,
{
    let rule_id = parse_rule_id(&id)?;
    let rule = state.rule_service.get_rule(rule_id).await?;
    Ok(Json(GeofenceResponse {
        center: rule.center,
        radius_meters: rule.radius_meters,
        polygon: geo::circle_polygon(rule.center, rule.radius_meters),
    }))
}
