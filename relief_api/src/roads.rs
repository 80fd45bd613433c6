use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use jiff::Timestamp;
use relief_core::model::{
    kilometers::Kilometers,
    location::LocationId,
    minutes::Minutes,
    road_segment::{RoadCondition, RoadSegment, RoadSegmentId},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;

use crate::{
    error::ApiError,
    state::AppState,
    store::{LocationKind, ReliefStore, Stored, newest_first},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoadBody {
    from_location: LocationId,
    to_location: LocationId,
    distance: Kilometers,
    travel_time: Minutes,
    #[serde(default)]
    is_blocked: bool,
    #[serde(default)]
    road_condition: RoadCondition,
}

/// Endpoints are fixed once a road exists; absent fields keep their value.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoadBody {
    distance: Option<Kilometers>,
    travel_time: Option<Minutes>,
    is_blocked: Option<bool>,
    road_condition: Option<RoadCondition>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    id: LocationId,
    name: String,
    kind: LocationKind,
    latitude: f64,
    longitude: f64,
}

/// A road with both endpoints expanded. An endpoint whose location has been deleted
/// is `null`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadResponse {
    id: RoadSegmentId,
    from_location: Option<LocationSummary>,
    to_location: Option<LocationSummary>,
    distance: Kilometers,
    travel_time: Minutes,
    is_blocked: bool,
    road_condition: RoadCondition,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl RoadResponse {
    fn new(record: Stored<RoadSegment>, store: &ReliefStore) -> Self {
        let summary = |id: &LocationId| {
            store.find_location(id).map(|location| LocationSummary {
                id: location.id().clone(),
                name: location.name().to_string(),
                kind: LocationKind::from(location),
                latitude: location.latitude(),
                longitude: location.longitude(),
            })
        };
        let road = record.value;

        RoadResponse {
            from_location: summary(&road.from_location),
            to_location: summary(&road.to_location),
            id: road.id,
            distance: road.distance,
            travel_time: road.travel_time,
            is_blocked: road.is_blocked,
            road_condition: road.road_condition,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

fn not_found() -> ApiError {
    ApiError::NotFound(String::from("Road not found"))
}

/// Roads, most recently created first.
pub async fn list_roads(State(state): State<Arc<AppState>>) -> Json<Vec<RoadResponse>> {
    let store = state.store.read();
    let roads = newest_first(store.road_segments().to_vec())
        .into_iter()
        .map(|record| RoadResponse::new(record, &store))
        .collect();

    Json(roads)
}

pub async fn get_road(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<RoadResponse>, ApiError> {
    let store = state.store.read();
    let record = store
        .road_segment(&RoadSegmentId::new(id))
        .cloned()
        .ok_or_else(not_found)?;

    Ok(Json(RoadResponse::new(record, &store)))
}

pub async fn create_road(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateRoadBody>, JsonRejection>,
) -> Result<(StatusCode, Json<RoadResponse>), ApiError> {
    let Json(body) = payload?;
    let road = RoadSegment {
        id: RoadSegmentId::new(Uuid::new_v4().to_string()),
        from_location: body.from_location,
        to_location: body.to_location,
        distance: body.distance,
        travel_time: body.travel_time,
        is_blocked: body.is_blocked,
        road_condition: body.road_condition,
    };
    road.validate()?;

    let mut store = state.store.write();
    for endpoint in [&road.from_location, &road.to_location] {
        if store.find_location(endpoint).is_none() {
            return Err(ApiError::BadRequest(format!("Unknown location {endpoint}")));
        }
    }

    info!(road = %road.id, "created road segment");

    let record = Stored::new(road);
    store.insert_road_segment(record.clone());

    Ok((StatusCode::CREATED, Json(RoadResponse::new(record, &store))))
}

pub async fn update_road(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateRoadBody>, JsonRejection>,
) -> Result<Json<RoadResponse>, ApiError> {
    let Json(body) = payload?;

    let mut store = state.store.write();
    let mut road = store
        .road_segment(&RoadSegmentId::new(id))
        .map(|record| record.value.clone())
        .ok_or_else(not_found)?;

    if let Some(distance) = body.distance {
        road.distance = distance;
    }
    if let Some(travel_time) = body.travel_time {
        road.travel_time = travel_time;
    }
    if let Some(is_blocked) = body.is_blocked {
        road.is_blocked = is_blocked;
    }
    if let Some(road_condition) = body.road_condition {
        road.road_condition = road_condition;
    }

    road.validate()?;
    info!(road = %road.id, blocked = road.is_blocked, "updated road segment");

    let record = store.replace_road_segment(road).ok_or_else(not_found)?;

    Ok(Json(RoadResponse::new(record, &store)))
}

pub async fn delete_road(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let mut store = state.store.write();
    let record = store
        .remove_road_segment(&RoadSegmentId::new(id))
        .ok_or_else(not_found)?;

    info!(road = %record.value.id, "deleted road segment");

    Ok(Json(json!({
        "message": "Road deleted successfully",
        "road": RoadResponse::new(record, &store),
    })))
}
