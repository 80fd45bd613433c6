use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::{
    accessibility::Accessibility,
    location::{LocationId, validate_position},
    resources::Resources,
    severity::Severity,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum NeedSiteStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// An affected area competing for relief resources.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NeedSite {
    pub id: LocationId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub people_affected: u32,
    #[schemars(with = "u8")]
    pub severity: Severity,
    #[serde(default)]
    #[schemars(with = "u8")]
    pub access_difficulty: Accessibility,
    #[serde(default)]
    pub resources_needed: Resources,
    #[serde(default)]
    pub priority_score: f64,
    #[serde(default)]
    pub status: NeedSiteStatus,
}

impl NeedSite {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_position(&self.id, &self.name, self.latitude, self.longitude)?;

        if !(0.0..=1.0).contains(&self.priority_score) {
            return Err(ValidationError::PriorityScoreOutOfRange {
                location: self.id.clone(),
                score: self.priority_score,
            });
        }

        Ok(())
    }
}
