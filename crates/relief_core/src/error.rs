use thiserror::Error;

use crate::model::{location::LocationId, road_segment::RoadSegmentId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PriorityError {
    #[error("No need sites found to rank")]
    EmptyInput,
    #[error("Priority weights must be non-negative and sum to 1.0, got {severity} + {people} + {access}")]
    InvalidWeights {
        severity: f64,
        people: f64,
        access: f64,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Road segment {segment} references unknown location {location}")]
    DanglingReference {
        segment: RoadSegmentId,
        location: LocationId,
    },
    #[error("Location {0} appears more than once in the snapshot")]
    DuplicateLocation(LocationId),
    #[error("Total {metric} over open road segments exceeds the representable range")]
    WeightOverflow { metric: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown location {0}")]
    InvalidIdentity(LocationId),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Location {0} has no name")]
    MissingName(LocationId),
    #[error("Latitude {latitude} of location {location} is outside [-90, 90]")]
    LatitudeOutOfRange { location: LocationId, latitude: f64 },
    #[error("Longitude {longitude} of location {location} is outside [-180, 180]")]
    LongitudeOutOfRange {
        location: LocationId,
        longitude: f64,
    },
    #[error("Severity {0} is outside [1, 5]")]
    SeverityOutOfRange(u8),
    #[error("Access difficulty must be 0 or 1, got {0}")]
    InvalidAccessibilityFlag(u8),
    #[error("Priority score {score} of location {location} is outside [0, 1]")]
    PriorityScoreOutOfRange { location: LocationId, score: f64 },
    #[error("Road segment {segment} has an invalid distance {distance}")]
    InvalidDistance {
        segment: RoadSegmentId,
        distance: f64,
    },
    #[error("Road segment {segment} has an invalid travel time {travel_time}")]
    InvalidTravelTime {
        segment: RoadSegmentId,
        travel_time: f64,
    },
    #[error(transparent)]
    Graph(#[from] GraphError),
}
