use serde::{Deserialize, Serialize};

use crate::{
    constants::{ACCESS_WEIGHT, PEOPLE_WEIGHT, SEVERITY_WEIGHT, WEIGHTS_SUM_TOLERANCE},
    error::PriorityError,
};

/// Relative influence of each signal on the composite priority score.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "RawPriorityWeights")]
pub struct PriorityWeights {
    severity: f64,
    people: f64,
    access: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPriorityWeights {
    severity: f64,
    people: f64,
    access: f64,
}

impl PriorityWeights {
    pub fn new(severity: f64, people: f64, access: f64) -> Result<Self, PriorityError> {
        let all_valid = [severity, people, access]
            .iter()
            .all(|weight| weight.is_finite() && *weight >= 0.0);
        let sum = severity + people + access;

        if !all_valid || (sum - 1.0).abs() > WEIGHTS_SUM_TOLERANCE {
            return Err(PriorityError::InvalidWeights {
                severity,
                people,
                access,
            });
        }

        Ok(PriorityWeights {
            severity,
            people,
            access,
        })
    }

    pub fn severity(&self) -> f64 {
        self.severity
    }

    pub fn people(&self) -> f64 {
        self.people
    }

    pub fn access(&self) -> f64 {
        self.access
    }
}

impl Default for PriorityWeights {
    fn default() -> Self {
        PriorityWeights {
            severity: SEVERITY_WEIGHT,
            people: PEOPLE_WEIGHT,
            access: ACCESS_WEIGHT,
        }
    }
}

impl TryFrom<RawPriorityWeights> for PriorityWeights {
    type Error = PriorityError;

    fn try_from(value: RawPriorityWeights) -> Result<Self, Self::Error> {
        PriorityWeights::new(value.severity, value.people, value.access)
    }
}
