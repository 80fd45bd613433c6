use crate::{graph::{Graph, NodeIdx}, graph_edge::EdgeIdx};

use super::weighting::{Weight, Weighting};

/// Nodes and edges of a shortest path, from start to end.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPath {
    pub nodes: Vec<NodeIdx>,
    pub edges: Vec<EdgeIdx>,
    pub weight: Weight,
}

pub trait ShortestPathAlgorithm {
    /// Minimum-weight path from `start` to `end`, or `None` when `end` is unreachable.
    ///
    /// Both nodes must belong to `graph`.
    fn calc_path(
        &mut self,
        graph: &impl Graph,
        weighting: &dyn Weighting,
        start: NodeIdx,
        end: NodeIdx,
    ) -> Option<SearchPath>;
}
