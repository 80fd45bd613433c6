pub mod compute_priorities;
pub mod compute_route;
pub mod statistics;
