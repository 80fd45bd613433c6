pub mod constants;
pub mod error;
pub mod graph;
pub mod graph_edge;
pub mod json;
pub mod model;
pub mod priority;
pub mod route_graph;
pub mod routing;
pub mod snapshot;
pub mod snapshot_source;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
