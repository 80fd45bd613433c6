use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State};
use relief_core::{
    json::types::JsonRankedNeedSite, priority::priority_weights::PriorityWeights,
    snapshot_source::SnapshotSource,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ComputePrioritiesBody {
    weights: Option<PriorityWeights>,
}

#[derive(Serialize)]
pub struct ComputePrioritiesResponse {
    message: &'static str,
    areas: Vec<JsonRankedNeedSite>,
}

/// Ranks every need site and stores the new scores. The body is optional.
pub async fn compute_priorities_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ComputePrioritiesResponse>, ApiError> {
    let body: ComputePrioritiesBody = if body.is_empty() {
        ComputePrioritiesBody::default()
    } else {
        serde_json::from_slice(&body).map_err(|error| ApiError::BadRequest(error.to_string()))?
    };

    let weights = body.weights.unwrap_or(state.weights);
    let snapshot = state.store.read().snapshot()?;

    let ranked = snapshot.compute_priorities(weights)?;
    state.store.write().apply_priorities(&ranked);

    info!(areas = ranked.len(), "stored need site priorities");

    Ok(Json(ComputePrioritiesResponse {
        message: "Priorities computed successfully",
        areas: ranked.into_iter().map(JsonRankedNeedSite::from).collect(),
    }))
}
