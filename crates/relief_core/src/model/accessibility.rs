use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Binary access flag of a need site, carried on the wire as 0 (easy) or 1 (difficult).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Accessibility {
    #[default]
    Easy,
    Difficult,
}

impl Accessibility {
    pub fn flag(&self) -> u8 {
        match self {
            Accessibility::Easy => 0,
            Accessibility::Difficult => 1,
        }
    }
}

impl TryFrom<u8> for Accessibility {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Accessibility::Easy),
            1 => Ok(Accessibility::Difficult),
            other => Err(ValidationError::InvalidAccessibilityFlag(other)),
        }
    }
}

impl From<Accessibility> for u8 {
    fn from(value: Accessibility) -> Self {
        value.flag()
    }
}
