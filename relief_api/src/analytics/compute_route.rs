use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use relief_core::{
    json::types::{JsonRouteRequest, JsonRouteResult},
    routing::routing_path::RouteResult,
    snapshot_source::SnapshotSource,
};
use serde_json::json;

use crate::{error::ApiError, state::AppState};

/// Shortest route between two locations. An unreachable destination answers 404.
pub async fn compute_route_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<JsonRouteRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload?;
    let request = body.into_request().ok_or_else(|| {
        ApiError::BadRequest(String::from("Start and end locations required"))
    })?;

    let snapshot = state.store.read().snapshot()?;

    let response = match snapshot.route(&request)? {
        result @ RouteResult::Found(_) => Json(JsonRouteResult::from(result)).into_response(),
        RouteResult::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "found": false,
                "error": "No route found",
                "message": "No available path between selected locations",
            })),
        )
            .into_response(),
    };

    Ok(response)
}
