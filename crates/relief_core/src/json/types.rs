use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    model::{location::LocationId, need_site::NeedSite},
    priority::priority_level::PriorityLevel,
    routing::{
        routing_path::{RoutePoint, RouteResult, RoutingPathLeg},
        routing_request::{RoutingRequest, RoutingRequestOptions},
    },
};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", rename = "RouteRequest")]
pub struct JsonRouteRequest {
    pub start_id: Option<LocationId>,
    pub end_id: Option<LocationId>,
    #[serde(flatten)]
    pub options: RoutingRequestOptions,
}

impl JsonRouteRequest {
    /// `None` when either endpoint is missing.
    pub fn into_request(self) -> Option<RoutingRequest> {
        Some(RoutingRequest {
            start: self.start_id?,
            end: self.end_id?,
            options: self.options,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", rename = "RouteResult")]
pub struct JsonRouteResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<RoutePoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_travel_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legs: Option<Vec<RoutingPathLeg>>,
}

impl From<RouteResult> for JsonRouteResult {
    fn from(value: RouteResult) -> Self {
        match value {
            RouteResult::Found(path) => JsonRouteResult {
                found: true,
                total_distance: Some(path.total_distance().value()),
                total_travel_time: Some(path.total_travel_time().value()),
                legs: Some(path.legs().to_vec()),
                path: Some(path.into_points()),
            },
            RouteResult::NotFound => JsonRouteResult {
                found: false,
                path: None,
                total_distance: None,
                total_travel_time: None,
                legs: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", rename = "RankedNeedSite")]
pub struct JsonRankedNeedSite {
    #[serde(flatten)]
    pub site: NeedSite,
    pub priority_level: PriorityLevel,
}

impl From<NeedSite> for JsonRankedNeedSite {
    fn from(site: NeedSite) -> Self {
        JsonRankedNeedSite {
            priority_level: PriorityLevel::from_score(site.priority_score),
            site,
        }
    }
}
