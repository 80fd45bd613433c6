use crate::{
    define_index_newtype,
    graph::NodeIdx,
    model::{kilometers::Kilometers, minutes::Minutes, road_segment::RoadSegmentId},
};

define_index_newtype!(EdgeIdx, GraphEdge);

#[derive(Debug, Clone)]
pub struct GraphEdge {
    segment_id: RoadSegmentId,
    start_node: NodeIdx,
    end_node: NodeIdx,
    distance: Kilometers,
    travel_time: Minutes,
}

impl GraphEdge {
    pub fn new(
        segment_id: RoadSegmentId,
        start_node: NodeIdx,
        end_node: NodeIdx,
        distance: Kilometers,
        travel_time: Minutes,
    ) -> Self {
        GraphEdge {
            segment_id,
            start_node,
            end_node,
            distance,
            travel_time,
        }
    }

    pub fn segment_id(&self) -> &RoadSegmentId {
        &self.segment_id
    }

    pub fn distance(&self) -> Kilometers {
        self.distance
    }

    pub fn travel_time(&self) -> Minutes {
        self.travel_time
    }

    /// The opposite endpoint of `node`. Edges are undirected.
    pub fn adj_node(&self, node: NodeIdx) -> NodeIdx {
        if self.start_node == node {
            self.end_node
        } else {
            self.start_node
        }
    }
}
