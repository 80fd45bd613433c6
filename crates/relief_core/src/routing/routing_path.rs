use schemars::JsonSchema;
use serde::Serialize;

use crate::{
    constants::ROUTE_DISTANCE_DECIMALS,
    graph::{Graph, NodeIdx},
    graph_edge::EdgeIdx,
    model::{
        kilometers::Kilometers,
        location::{Location, LocationId},
        minutes::Minutes,
        road_segment::RoadSegmentId,
    },
    route_graph::RouteGraph,
    utils::rounding::round_to_decimals,
};

/// A location along a route.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoutePoint {
    pub id: LocationId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Location> for RoutePoint {
    fn from(location: &Location) -> Self {
        RoutePoint {
            id: location.id().clone(),
            name: location.name().to_string(),
            latitude: location.latitude(),
            longitude: location.longitude(),
        }
    }
}

/// The road segment travelled between two consecutive points.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoutingPathLeg {
    pub segment_id: RoadSegmentId,
    pub distance: Kilometers,
    pub travel_time: Minutes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoutingPath {
    points: Vec<RoutePoint>,
    legs: Vec<RoutingPathLeg>,
    total_distance: Kilometers,
    total_travel_time: Minutes,
}

impl RoutingPath {
    pub fn new(points: Vec<RoutePoint>, legs: Vec<RoutingPathLeg>) -> Self {
        let distance: Kilometers = legs.iter().map(|leg| leg.distance).sum();
        let travel_time: Minutes = legs.iter().map(|leg| leg.travel_time).sum();

        RoutingPath {
            points,
            legs,
            total_distance: Kilometers::new(round_to_decimals(
                distance.value(),
                ROUTE_DISTANCE_DECIMALS,
            )),
            total_travel_time: Minutes::new(round_to_decimals(
                travel_time.value(),
                ROUTE_DISTANCE_DECIMALS,
            )),
        }
    }

    /// Locations from start to end, both included.
    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    pub fn legs(&self) -> &[RoutingPathLeg] {
        &self.legs
    }

    /// Sum of the leg distances, rounded to two decimals.
    pub fn total_distance(&self) -> Kilometers {
        self.total_distance
    }

    pub fn total_travel_time(&self) -> Minutes {
        self.total_travel_time
    }

    pub fn into_points(self) -> Vec<RoutePoint> {
        self.points
    }
}

/// Outcome of a route query. An unreachable destination is a regular outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteResult {
    Found(RoutingPath),
    NotFound,
}

impl RouteResult {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteResult::Found(_))
    }

    pub fn path(&self) -> Option<&RoutingPath> {
        match self {
            RouteResult::Found(path) => Some(path),
            RouteResult::NotFound => None,
        }
    }
}

pub fn build_routing_path(graph: &RouteGraph, nodes: &[NodeIdx], edges: &[EdgeIdx]) -> RoutingPath {
    let points = nodes
        .iter()
        .map(|&node| RoutePoint::from(graph.location(node)))
        .collect();

    let legs = edges
        .iter()
        .map(|&edge_id| {
            let edge = graph.edge(edge_id);
            RoutingPathLeg {
                segment_id: edge.segment_id().clone(),
                distance: edge.distance(),
                travel_time: edge.travel_time(),
            }
        })
        .collect();

    RoutingPath::new(points, legs)
}
