use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use relief_core::model::{
    center::{Center, CenterStatus},
    location::{Location, LocationId},
    resources::Resources,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;

use crate::{
    error::ApiError,
    state::AppState,
    store::{LocationKind, Stored, newest_first},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterBody {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    food: u32,
    #[serde(default)]
    water: u32,
    #[serde(default)]
    medical: u32,
    #[serde(default)]
    status: CenterStatus,
}

impl CenterBody {
    fn into_center(self, id: LocationId) -> Center {
        Center {
            id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            resources: Resources::new(self.food, self.water, self.medical),
            status: self.status,
        }
    }
}

fn not_found() -> ApiError {
    ApiError::NotFound(String::from("Center not found"))
}

/// Centers, most recently created first.
pub async fn list_centers(State(state): State<Arc<AppState>>) -> Json<Vec<Stored<Center>>> {
    let centers = state
        .store
        .read()
        .centers()
        .map(Stored::cloned)
        .collect();

    Json(newest_first(centers))
}

pub async fn get_center(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Stored<Center>>, ApiError> {
    state
        .store
        .read()
        .location(&LocationId::new(id), LocationKind::Center)
        .and_then(|record| record.clone().filter_map(Location::into_center))
        .map(Json)
        .ok_or_else(not_found)
}

pub async fn create_center(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CenterBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Stored<Center>>), ApiError> {
    let Json(body) = payload?;
    let center = body.into_center(LocationId::new(Uuid::new_v4().to_string()));
    center.validate()?;

    let record = Stored::new(center);
    state
        .store
        .write()
        .insert_location(record.clone().map(Location::from));
    info!(center = %record.value.id, "created center");

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_center(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<CenterBody>, JsonRejection>,
) -> Result<Json<Stored<Center>>, ApiError> {
    let Json(body) = payload?;
    let center = body.into_center(LocationId::new(id));
    center.validate()?;

    state
        .store
        .write()
        .replace_location(center.into())
        .and_then(|record| record.filter_map(Location::into_center))
        .map(Json)
        .ok_or_else(not_found)
}

pub async fn delete_center(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let center = state
        .store
        .write()
        .remove_location(&LocationId::new(id), LocationKind::Center)
        .ok_or_else(not_found)?;

    info!(center = %center.value.id(), "deleted center");

    Ok(Json(json!({
        "message": "Center deleted successfully",
        "center": center,
    })))
}
