use std::sync::Arc;

use axum::{Json, extract::State};
use relief_core::{
    priority::allocation_summary::AllocationSummary, snapshot::SnapshotStatistics,
    snapshot_source::SnapshotSource,
};

use crate::{error::ApiError, state::AppState};

pub async fn statistics_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SnapshotStatistics>, ApiError> {
    let snapshot = state.store.read().snapshot()?;
    Ok(Json(snapshot.statistics()))
}

pub async fn allocation_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AllocationSummary>, ApiError> {
    let snapshot = state.store.read().snapshot()?;
    Ok(Json(snapshot.allocation_summary()))
}
