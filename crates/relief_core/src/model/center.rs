use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::{
    location::{LocationId, validate_position},
    resources::Resources,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CenterStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
}

/// A relief center holding supplies on hand.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Center {
    pub id: LocationId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub resources: Resources,
    #[serde(default)]
    pub status: CenterStatus,
}

impl Center {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_position(&self.id, &self.name, self.latitude, self.longitude)
    }
}
