use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::{HIGH_PRIORITY_THRESHOLD, MEDIUM_PRIORITY_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_PRIORITY_THRESHOLD {
            PriorityLevel::High
        } else if score >= MEDIUM_PRIORITY_THRESHOLD {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        }
    }
}

impl std::fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityLevel::High => write!(f, "high"),
            PriorityLevel::Medium => write!(f, "medium"),
            PriorityLevel::Low => write!(f, "low"),
        }
    }
}
