use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::{center::Center, need_site::NeedSite};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, JsonSchema)]
pub struct LocationId(String);

impl LocationId {
    pub fn new(id: impl Into<String>) -> Self {
        LocationId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocationId {
    fn from(value: &str) -> Self {
        LocationId::new(value)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A node of the road network: either a relief center or a need site.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Location {
    Center(Center),
    NeedSite(NeedSite),
}

impl Location {
    pub fn id(&self) -> &LocationId {
        match self {
            Location::Center(center) => &center.id,
            Location::NeedSite(site) => &site.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Location::Center(center) => &center.name,
            Location::NeedSite(site) => &site.name,
        }
    }

    pub fn latitude(&self) -> f64 {
        match self {
            Location::Center(center) => center.latitude,
            Location::NeedSite(site) => site.latitude,
        }
    }

    pub fn longitude(&self) -> f64 {
        match self {
            Location::Center(center) => center.longitude,
            Location::NeedSite(site) => site.longitude,
        }
    }

    pub fn as_center(&self) -> Option<&Center> {
        match self {
            Location::Center(center) => Some(center),
            Location::NeedSite(_) => None,
        }
    }

    pub fn as_need_site(&self) -> Option<&NeedSite> {
        match self {
            Location::NeedSite(site) => Some(site),
            Location::Center(_) => None,
        }
    }

    pub fn into_center(self) -> Option<Center> {
        match self {
            Location::Center(center) => Some(center),
            Location::NeedSite(_) => None,
        }
    }

    pub fn into_need_site(self) -> Option<NeedSite> {
        match self {
            Location::NeedSite(site) => Some(site),
            Location::Center(_) => None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Location::Center(center) => center.validate(),
            Location::NeedSite(site) => site.validate(),
        }
    }
}

impl From<Center> for Location {
    fn from(value: Center) -> Self {
        Location::Center(value)
    }
}

impl From<NeedSite> for Location {
    fn from(value: NeedSite) -> Self {
        Location::NeedSite(value)
    }
}

pub(crate) fn validate_position(
    id: &LocationId,
    name: &str,
    latitude: f64,
    longitude: f64,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingName(id.clone()));
    }

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ValidationError::LatitudeOutOfRange {
            location: id.clone(),
            latitude,
        });
    }

    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::LongitudeOutOfRange {
            location: id.clone(),
            longitude,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::model::{center::CenterStatus, resources::Resources};

    use super::*;

    fn center(latitude: f64, longitude: f64) -> Location {
        Location::Center(Center {
            id: LocationId::new("c1"),
            name: String::from("Haldwani Central Hub"),
            latitude,
            longitude,
            resources: Resources::new(500, 1000, 200),
            status: CenterStatus::Active,
        })
    }

    #[test]
    fn test_shared_accessors() {
        let location = center(29.2183, 79.5130);
        assert_eq!(location.id().as_str(), "c1");
        assert_eq!(location.name(), "Haldwani Central Hub");
        assert_eq!(location.latitude(), 29.2183);
        assert_eq!(location.longitude(), 79.5130);
        assert!(location.as_center().is_some());
        assert!(location.as_need_site().is_none());
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(center(90.0, -180.0).validate().is_ok());
        assert!(matches!(
            center(90.5, 0.0).validate(),
            Err(ValidationError::LatitudeOutOfRange { .. })
        ));
        assert!(matches!(
            center(0.0, 180.1).validate(),
            Err(ValidationError::LongitudeOutOfRange { .. })
        ));
        assert!(matches!(
            center(f64::NAN, 0.0).validate(),
            Err(ValidationError::LatitudeOutOfRange { .. })
        ));
    }

    #[test]
    fn test_deserialize_tagged_location() {
        let json = r#"{
            "kind": "needSite",
            "id": "a1",
            "name": "Rampur Village",
            "latitude": 29.25,
            "longitude": 79.55,
            "peopleAffected": 450,
            "severity": 5,
            "accessDifficulty": 1
        }"#;

        let location: Location = serde_json::from_str(json).unwrap();
        let site = location.as_need_site().unwrap();
        assert_eq!(site.people_affected, 450);
        assert_eq!(site.severity.level(), 5);
        assert_eq!(site.priority_score, 0.0);
        assert_eq!(site.resources_needed, Resources::EMPTY);
    }
}
