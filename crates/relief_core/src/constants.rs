use crate::routing::weighting::Weight;

pub(crate) const MAX_WEIGHT: Weight = f64::INFINITY;

pub const SEVERITY_WEIGHT: f64 = 0.5;
pub const PEOPLE_WEIGHT: f64 = 0.3;
pub const ACCESS_WEIGHT: f64 = 0.2;

pub(crate) const MAX_SEVERITY: u8 = 5;
pub(crate) const MIN_SEVERITY: u8 = 1;

pub(crate) const PRIORITY_SCORE_DECIMALS: u32 = 3;
pub(crate) const ROUTE_DISTANCE_DECIMALS: u32 = 2;

pub(crate) const WEIGHTS_SUM_TOLERANCE: f64 = 1e-9;

pub const HIGH_PRIORITY_THRESHOLD: f64 = 0.7;
pub const MEDIUM_PRIORITY_THRESHOLD: f64 = 0.4;
