use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{graph::NodeIdx, routing::weighting::Weight};

/// Candidate set of a label-setting search.
///
/// `pop` returns the candidate with the smallest weight, ties going to the lowest node index.
/// Implementations may hand out stale entries, callers skip entries whose weight is above
/// the node's current tentative weight.
pub trait Frontier {
    fn reset(&mut self, node_count: usize);

    fn push(&mut self, node: NodeIdx, weight: Weight);

    fn pop(&mut self) -> Option<(NodeIdx, Weight)>;
}

/// Scans every node on each selection. O(n) per pop, no allocation after reset.
#[derive(Default)]
pub struct ScanFrontier {
    tentative: Vec<Option<Weight>>,
}

impl Frontier for ScanFrontier {
    fn reset(&mut self, node_count: usize) {
        self.tentative.clear();
        self.tentative.resize(node_count, None);
    }

    fn push(&mut self, node: NodeIdx, weight: Weight) {
        self.tentative[node.get()] = Some(weight);
    }

    fn pop(&mut self) -> Option<(NodeIdx, Weight)> {
        let (index, weight) = self
            .tentative
            .iter()
            .enumerate()
            .filter_map(|(index, tentative)| tentative.map(|weight| (index, weight)))
            .reduce(|best, candidate| if candidate.1 < best.1 { candidate } else { best })?;

        self.tentative[index] = None;
        Some((NodeIdx::new(index), weight))
    }
}

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    node_id: NodeIdx,
    weight: Weight,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip both keys to make this a min-heap
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

/// Binary heap with lazy deletion, O(log n) per operation.
#[derive(Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<HeapItem>,
}

impl Frontier for HeapFrontier {
    fn reset(&mut self, node_count: usize) {
        self.heap.clear();
        self.heap.reserve(node_count);
    }

    fn push(&mut self, node: NodeIdx, weight: Weight) {
        self.heap.push(HeapItem {
            node_id: node,
            weight,
        });
    }

    fn pop(&mut self) -> Option<(NodeIdx, Weight)> {
        self.heap
            .pop()
            .map(|HeapItem { node_id, weight }| (node_id, weight))
    }
}
