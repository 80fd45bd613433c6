use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::location::LocationId;

/// Edge cost minimized by the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RouteMetric {
    #[default]
    Distance,
    TravelTime,
}

/// How the search picks the next node to settle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RoutingAlgorithm {
    /// Linear scan over the unvisited nodes, fine for small networks.
    #[default]
    FrontierScan,
    BinaryHeap,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RoutingRequestOptions {
    pub metric: RouteMetric,
    pub algorithm: RoutingAlgorithm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingRequest {
    pub start: LocationId,
    pub end: LocationId,
    pub options: RoutingRequestOptions,
}

impl RoutingRequest {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        RoutingRequest {
            start: LocationId::new(start),
            end: LocationId::new(end),
            options: RoutingRequestOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RoutingRequestOptions) -> Self {
        self.options = options;
        self
    }
}
