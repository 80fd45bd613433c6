use std::time::Instant;

use tracing::debug;

use crate::{
    constants::MAX_WEIGHT,
    graph::{Graph, NodeIdx},
    graph_edge::EdgeIdx,
};

use super::{
    frontier::{Frontier, HeapFrontier, ScanFrontier},
    shortest_path_algorithm::{SearchPath, ShortestPathAlgorithm},
    weighting::{Weight, Weighting},
};

#[derive(Clone, Copy)]
struct NodeData {
    weight: Weight,
    settled: bool,
    // Node and edge the current best path arrives from
    parent: Option<(NodeIdx, EdgeIdx)>,
}

impl NodeData {
    fn new() -> Self {
        NodeData {
            weight: MAX_WEIGHT,
            settled: false,
            parent: None,
        }
    }
}

/// Single-source Dijkstra, stopping as soon as the target is settled.
///
/// The frontier decides how the next node is selected. Both frontiers break ties on the
/// lowest node index, so the returned path does not depend on the frontier.
pub struct Dijkstra<F: Frontier> {
    frontier: F,
    data: Vec<NodeData>,
}

pub type ScanDijkstra = Dijkstra<ScanFrontier>;
pub type HeapDijkstra = Dijkstra<HeapFrontier>;

impl<F: Frontier + Default> Default for Dijkstra<F> {
    fn default() -> Self {
        Dijkstra::with_frontier(F::default())
    }
}

impl<F: Frontier> Dijkstra<F> {
    pub fn with_frontier(frontier: F) -> Self {
        Dijkstra {
            frontier,
            data: Vec::new(),
        }
    }

    fn init(&mut self, node_count: usize, start: NodeIdx) {
        self.data.clear();
        self.data.resize(node_count, NodeData::new());
        self.frontier.reset(node_count);

        self.data[start.get()].weight = 0.0;
        self.frontier.push(start, 0.0);
    }

    fn build_path(&self, end: NodeIdx) -> SearchPath {
        let mut nodes = vec![end];
        let mut edges = Vec::new();

        let mut node = end;
        while let Some((parent, edge)) = self.data[node.get()].parent {
            edges.push(edge);
            nodes.push(parent);
            node = parent;
        }

        nodes.reverse();
        edges.reverse();

        SearchPath {
            nodes,
            edges,
            weight: self.data[end.get()].weight,
        }
    }
}

impl<F: Frontier> ShortestPathAlgorithm for Dijkstra<F> {
    fn calc_path(
        &mut self,
        graph: &impl Graph,
        weighting: &dyn Weighting,
        start: NodeIdx,
        end: NodeIdx,
    ) -> Option<SearchPath> {
        let started = Instant::now();
        self.init(graph.node_count(), start);

        let mut iterations = 0;
        let mut relaxed_edges = 0;

        while let Some((node_id, weight)) = self.frontier.pop() {
            let node_data = self.data[node_id.get()];

            // Stale frontier entry
            if node_data.settled || weight > node_data.weight {
                continue;
            }

            self.data[node_id.get()].settled = true;
            iterations += 1;

            if node_id == end {
                break;
            }

            for edge_id in graph.node_edges_iter(node_id) {
                let edge = graph.edge(edge_id);
                let adj_node = edge.adj_node(node_id);

                if self.data[adj_node.get()].settled {
                    continue;
                }

                let edge_weight = weighting.calc_edge_weight(edge);

                if edge_weight == MAX_WEIGHT {
                    continue;
                }

                let next_weight = weight + edge_weight;

                if next_weight < self.data[adj_node.get()].weight {
                    relaxed_edges += 1;
                    self.data[adj_node.get()] = NodeData {
                        weight: next_weight,
                        settled: false,
                        parent: Some((node_id, edge_id)),
                    };
                    self.frontier.push(adj_node, next_weight);
                }
            }
        }

        debug!(
            iterations,
            relaxed_edges,
            elapsed = ?started.elapsed(),
            "dijkstra finished"
        );

        if self.data[end.get()].weight == MAX_WEIGHT {
            return None;
        }

        Some(self.build_path(end))
    }
}
