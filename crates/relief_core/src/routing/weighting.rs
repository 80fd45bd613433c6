use crate::graph_edge::GraphEdge;

pub type Weight = f64;

/// Cost of traversing an edge. Edges are undirected, so the cost is the same both ways.
pub trait Weighting {
    fn calc_edge_weight(&self, edge: &GraphEdge) -> Weight;
}

/// Shortest route by road distance.
pub struct DistanceWeighting;

impl Weighting for DistanceWeighting {
    #[inline(always)]
    fn calc_edge_weight(&self, edge: &GraphEdge) -> Weight {
        edge.distance().value()
    }
}

/// Fastest route by recorded travel time.
pub struct TravelTimeWeighting;

impl Weighting for TravelTimeWeighting {
    #[inline(always)]
    fn calc_edge_weight(&self, edge: &GraphEdge) -> Weight {
        edge.travel_time().value()
    }
}
