use std::sync::Arc;

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    analytics::{
        compute_priorities::compute_priorities_handler,
        compute_route::compute_route_handler,
        statistics::{allocation_handler, statistics_handler},
    },
    areas, centers,
    health::health_handler,
    roads,
    state::AppState,
};

pub fn app(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_handler))
        .route(
            "/api/centers",
            get(centers::list_centers).post(centers::create_center),
        )
        .route(
            "/api/centers/{id}",
            get(centers::get_center)
                .put(centers::update_center)
                .delete(centers::delete_center),
        )
        .route("/api/areas", get(areas::list_areas).post(areas::create_area))
        .route(
            "/api/areas/{id}",
            get(areas::get_area)
                .put(areas::update_area)
                .delete(areas::delete_area),
        )
        .route("/api/roads", get(roads::list_roads).post(roads::create_road))
        .route(
            "/api/roads/{id}",
            get(roads::get_road)
                .put(roads::update_road)
                .delete(roads::delete_road),
        )
        .route(
            "/api/analytics/compute-priorities",
            post(compute_priorities_handler),
        )
        .route("/api/analytics/compute-route", post(compute_route_handler))
        .route("/api/analytics/statistics", get(statistics_handler))
        .route("/api/analytics/allocation", get(allocation_handler))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}
