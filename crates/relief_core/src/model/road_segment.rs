use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::{kilometers::Kilometers, location::LocationId, minutes::Minutes};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, JsonSchema)]
pub struct RoadSegmentId(String);

impl RoadSegmentId {
    pub fn new(id: impl Into<String>) -> Self {
        RoadSegmentId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoadSegmentId {
    fn from(value: &str) -> Self {
        RoadSegmentId::new(value)
    }
}

impl fmt::Display for RoadSegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoadCondition {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
    Damaged,
}

/// A road between two locations. Stored as from/to but traversable both ways.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoadSegment {
    pub id: RoadSegmentId,
    pub from_location: LocationId,
    pub to_location: LocationId,
    pub distance: Kilometers,
    pub travel_time: Minutes,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub road_condition: RoadCondition,
}

impl RoadSegment {
    pub fn is_self_loop(&self) -> bool {
        self.from_location == self.to_location
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.distance.is_valid() {
            return Err(ValidationError::InvalidDistance {
                segment: self.id.clone(),
                distance: self.distance.value(),
            });
        }

        if !self.travel_time.is_valid() {
            return Err(ValidationError::InvalidTravelTime {
                segment: self.id.clone(),
                travel_time: self.travel_time.value(),
            });
        }

        Ok(())
    }
}
