use std::time::Instant;

use fxhash::FxHashMap;
use tracing::debug;

use crate::{
    error::GraphError,
    graph::{Graph, NodeIdx},
    graph_edge::{EdgeIdx, GraphEdge},
    model::{
        location::{Location, LocationId},
        road_segment::RoadSegment,
    },
};

/// Undirected road network over a snapshot's locations.
///
/// Nodes are numbered in snapshot order. Blocked road segments are left out, parallel
/// segments and self-loops are kept as they are.
pub struct RouteGraph<'a> {
    locations: &'a [Location],
    node_index: FxHashMap<&'a LocationId, NodeIdx>,
    edges: Vec<GraphEdge>,
    adjacency_list: Vec<Vec<EdgeIdx>>,
    blocked_segments: usize,
}

impl<'a> RouteGraph<'a> {
    pub fn build(
        locations: &'a [Location],
        road_segments: &[RoadSegment],
    ) -> Result<RouteGraph<'a>, GraphError> {
        let started = Instant::now();

        let mut node_index =
            FxHashMap::with_capacity_and_hasher(locations.len(), Default::default());

        for (index, location) in locations.iter().enumerate() {
            if node_index.insert(location.id(), NodeIdx::new(index)).is_some() {
                return Err(GraphError::DuplicateLocation(location.id().clone()));
            }
        }

        let mut graph = RouteGraph {
            locations,
            node_index,
            edges: Vec::with_capacity(road_segments.len()),
            adjacency_list: vec![vec![]; locations.len()],
            blocked_segments: 0,
        };

        // Every simple path costs at most the sum over all open segments
        let mut total_distance = 0.0;
        let mut total_travel_time = 0.0;

        for segment in road_segments {
            let from_node = graph.resolve_endpoint(segment, &segment.from_location)?;
            let to_node = graph.resolve_endpoint(segment, &segment.to_location)?;

            if segment.is_blocked {
                graph.blocked_segments += 1;
                continue;
            }

            total_distance += segment.distance.value();
            total_travel_time += segment.travel_time.value();
            graph.add_edge(segment, from_node, to_node);
        }

        if !f64::is_finite(total_distance) {
            return Err(GraphError::WeightOverflow { metric: "distance" });
        }
        if !f64::is_finite(total_travel_time) {
            return Err(GraphError::WeightOverflow {
                metric: "travel time",
            });
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            blocked = graph.blocked_segments,
            elapsed = ?started.elapsed(),
            "built route graph"
        );

        Ok(graph)
    }

    fn resolve_endpoint(
        &self,
        segment: &RoadSegment,
        location: &LocationId,
    ) -> Result<NodeIdx, GraphError> {
        self.node_id(location)
            .ok_or_else(|| GraphError::DanglingReference {
                segment: segment.id.clone(),
                location: location.clone(),
            })
    }

    fn add_edge(&mut self, segment: &RoadSegment, from_node: NodeIdx, to_node: NodeIdx) {
        let edge_id = EdgeIdx::new(self.edges.len());
        self.edges.push(GraphEdge::new(
            segment.id.clone(),
            from_node,
            to_node,
            segment.distance,
            segment.travel_time,
        ));

        self.adjacency_list[from_node.get()].push(edge_id);
        if !segment.is_self_loop() {
            self.adjacency_list[to_node.get()].push(edge_id);
        }
    }

    pub fn node_id(&self, location: &LocationId) -> Option<NodeIdx> {
        self.node_index.get(location).copied()
    }

    pub fn location(&self, node: NodeIdx) -> &'a Location {
        let locations: &'a [Location] = self.locations;
        &locations[node]
    }

    pub fn blocked_segments(&self) -> usize {
        self.blocked_segments
    }
}

impl Graph for RouteGraph<'_> {
    type EdgeIterator<'b>
        = std::iter::Copied<std::slice::Iter<'b, EdgeIdx>>
    where
        Self: 'b;

    fn node_edges_iter(&self, node: NodeIdx) -> Self::EdgeIterator<'_> {
        self.adjacency_list[node.get()].iter().copied()
    }

    fn edge(&self, edge: EdgeIdx) -> &GraphEdge {
        &self.edges[edge]
    }

    fn node_count(&self) -> usize {
        self.locations.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
