use tracing::{debug, info};

use crate::{
    error::RouteError,
    graph::NodeIdx,
    model::location::LocationId,
    route_graph::RouteGraph,
};

use super::{
    dijkstra::{HeapDijkstra, ScanDijkstra},
    routing_path::{RouteResult, build_routing_path},
    routing_request::{RouteMetric, RoutingAlgorithm, RoutingRequest},
    shortest_path_algorithm::{SearchPath, ShortestPathAlgorithm},
    weighting::{DistanceWeighting, TravelTimeWeighting, Weighting},
};

/// Answers route queries over a built [`RouteGraph`].
pub struct ShortestPathSolver<'g, 'a> {
    graph: &'g RouteGraph<'a>,
}

impl<'g, 'a> ShortestPathSolver<'g, 'a> {
    pub fn new(graph: &'g RouteGraph<'a>) -> Self {
        ShortestPathSolver { graph }
    }

    /// Unknown start or end identities are rejected before any search runs.
    pub fn solve(&self, request: &RoutingRequest) -> Result<RouteResult, RouteError> {
        let start = self.resolve(&request.start)?;
        let end = self.resolve(&request.end)?;

        let weighting: &dyn Weighting = match request.options.metric {
            RouteMetric::Distance => &DistanceWeighting,
            RouteMetric::TravelTime => &TravelTimeWeighting,
        };

        let search_path = match request.options.algorithm {
            RoutingAlgorithm::FrontierScan => {
                ScanDijkstra::default().calc_path(self.graph, weighting, start, end)
            }
            RoutingAlgorithm::BinaryHeap => {
                HeapDijkstra::default().calc_path(self.graph, weighting, start, end)
            }
        };

        let Some(SearchPath { nodes, edges, .. }) = search_path else {
            info!(start = %request.start, end = %request.end, "no route found");
            return Ok(RouteResult::NotFound);
        };

        let path = build_routing_path(self.graph, &nodes, &edges);

        info!(
            start = %request.start,
            end = %request.end,
            distance = path.total_distance().value(),
            legs = path.legs().len(),
            "found route"
        );

        Ok(RouteResult::Found(path))
    }

    fn resolve(&self, id: &LocationId) -> Result<NodeIdx, RouteError> {
        self.graph.node_id(id).ok_or_else(|| {
            debug!(location = %id, "route endpoint not in snapshot");
            RouteError::InvalidIdentity(id.clone())
        })
    }
}
