pub mod allocation_summary;
pub mod priority_level;
pub mod priority_scorer;
pub mod priority_weights;
