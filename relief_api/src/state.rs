use parking_lot::RwLock;
use relief_core::priority::priority_weights::PriorityWeights;

use crate::store::ReliefStore;

pub struct AppState {
    pub store: RwLock<ReliefStore>,
    /// Used when a compute-priorities request carries no weights of its own.
    pub weights: PriorityWeights,
}

impl AppState {
    pub fn new(store: ReliefStore, weights: PriorityWeights) -> Self {
        AppState {
            store: RwLock::new(store),
            weights,
        }
    }
}
