use crate::{
    define_index_newtype,
    graph_edge::{EdgeIdx, GraphEdge},
    model::location::Location,
};

define_index_newtype!(NodeIdx, Location);

pub trait Graph {
    type EdgeIterator<'a>: Iterator<Item = EdgeIdx>
    where
        Self: 'a;

    /// Edges touching `node`, in either direction.
    fn node_edges_iter(&self, node: NodeIdx) -> Self::EdgeIterator<'_>;

    fn edge(&self, edge: EdgeIdx) -> &GraphEdge;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;
}
