pub mod dijkstra;
pub mod frontier;
pub mod routing_path;
pub mod routing_request;
pub mod shortest_path_algorithm;
pub mod shortest_path_solver;
pub mod weighting;
