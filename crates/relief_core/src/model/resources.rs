use std::ops::Add;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Relief supplies, either held by a center or needed by a site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct Resources {
    pub food: u32,
    pub water: u32,
    pub medical: u32,
}

impl Resources {
    pub const EMPTY: Resources = Resources {
        food: 0,
        water: 0,
        medical: 0,
    };

    pub fn new(food: u32, water: u32, medical: u32) -> Self {
        Resources {
            food,
            water,
            medical,
        }
    }

    pub fn get(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Food => self.food,
            ResourceKind::Water => self.water,
            ResourceKind::Medical => self.medical,
        }
    }
}

impl Add for Resources {
    type Output = Resources;

    fn add(self, other: Resources) -> Resources {
        Resources {
            food: self.food.saturating_add(other.food),
            water: self.water.saturating_add(other.water),
            medical: self.medical.saturating_add(other.medical),
        }
    }
}

impl std::iter::Sum for Resources {
    fn sum<I: Iterator<Item = Resources>>(iter: I) -> Resources {
        iter.fold(Resources::EMPTY, |acc, x| acc + x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Food,
    Water,
    Medical,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Food,
        ResourceKind::Water,
        ResourceKind::Medical,
    ];
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Food => write!(f, "food"),
            ResourceKind::Water => write!(f, "water"),
            ResourceKind::Medical => write!(f, "medical"),
        }
    }
}
