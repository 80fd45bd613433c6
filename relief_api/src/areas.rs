use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use relief_core::model::{
    accessibility::Accessibility,
    location::{Location, LocationId},
    need_site::{NeedSite, NeedSiteStatus},
    resources::Resources,
    severity::Severity,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;

use crate::{
    error::ApiError,
    state::AppState,
    store::{LocationKind, Stored},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaBody {
    name: String,
    latitude: f64,
    longitude: f64,
    people_affected: u32,
    severity: Severity,
    #[serde(default)]
    access_difficulty: Accessibility,
    #[serde(default)]
    food: u32,
    #[serde(default)]
    water: u32,
    #[serde(default)]
    medical: u32,
    priority_score: Option<f64>,
    #[serde(default)]
    status: NeedSiteStatus,
}

impl AreaBody {
    fn into_need_site(self, id: LocationId, previous_score: f64) -> NeedSite {
        NeedSite {
            id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            people_affected: self.people_affected,
            severity: self.severity,
            access_difficulty: self.access_difficulty,
            resources_needed: Resources::new(self.food, self.water, self.medical),
            priority_score: self.priority_score.unwrap_or(previous_score),
            status: self.status,
        }
    }
}

fn not_found() -> ApiError {
    ApiError::NotFound(String::from("Area not found"))
}

/// Need sites, highest priority first.
pub async fn list_areas(State(state): State<Arc<AppState>>) -> Json<Vec<Stored<NeedSite>>> {
    let mut areas: Vec<Stored<NeedSite>> = state
        .store
        .read()
        .need_sites()
        .map(Stored::cloned)
        .collect();
    areas.sort_by(|a, b| b.value.priority_score.total_cmp(&a.value.priority_score));

    Json(areas)
}

pub async fn get_area(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Stored<NeedSite>>, ApiError> {
    state
        .store
        .read()
        .location(&LocationId::new(id), LocationKind::NeedSite)
        .and_then(|record| record.clone().filter_map(Location::into_need_site))
        .map(Json)
        .ok_or_else(not_found)
}

pub async fn create_area(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AreaBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Stored<NeedSite>>), ApiError> {
    let Json(body) = payload?;
    let area = body.into_need_site(LocationId::new(Uuid::new_v4().to_string()), 0.0);
    area.validate()?;

    let record = Stored::new(area);
    state
        .store
        .write()
        .insert_location(record.clone().map(Location::from));
    info!(area = %record.value.id, "created need site");

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_area(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<AreaBody>, JsonRejection>,
) -> Result<Json<Stored<NeedSite>>, ApiError> {
    let Json(body) = payload?;
    let id = LocationId::new(id);

    let mut store = state.store.write();
    let previous_score = store
        .location(&id, LocationKind::NeedSite)
        .and_then(|record| record.value.as_need_site())
        .map(|site| site.priority_score)
        .ok_or_else(not_found)?;

    let area = body.into_need_site(id, previous_score);
    area.validate()?;

    store
        .replace_location(area.into())
        .and_then(|record| record.filter_map(Location::into_need_site))
        .map(Json)
        .ok_or_else(not_found)
}

pub async fn delete_area(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let area = state
        .store
        .write()
        .remove_location(&LocationId::new(id), LocationKind::NeedSite)
        .ok_or_else(not_found)?;

    info!(area = %area.value.id(), "deleted need site");

    Ok(Json(json!({
        "message": "Area deleted successfully",
        "area": area,
    })))
}
