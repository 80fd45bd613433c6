use serde::{Deserialize, Serialize};

use crate::{
    constants::{MAX_SEVERITY, MIN_SEVERITY},
    error::ValidationError,
};

/// Severity level of a need site, from 1 (minor) to 5 (critical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Severity(u8);

impl Severity {
    pub const MAX: Severity = Severity(MAX_SEVERITY);
    pub const MIN: Severity = Severity(MIN_SEVERITY);

    pub fn new(level: u8) -> Result<Self, ValidationError> {
        if (MIN_SEVERITY..=MAX_SEVERITY).contains(&level) {
            Ok(Severity(level))
        } else {
            Err(ValidationError::SeverityOutOfRange(level))
        }
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    /// Severity scaled to [0, 1] against the maximum level.
    pub fn normalized(&self) -> f64 {
        f64::from(self.0) / f64::from(MAX_SEVERITY)
    }
}

impl TryFrom<u8> for Severity {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Severity::new(value)
    }
}

impl From<Severity> for u8 {
    fn from(value: Severity) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_bounds() {
        assert!(Severity::new(0).is_err());
        assert!(Severity::new(6).is_err());
        assert_eq!(Severity::new(1).unwrap(), Severity::MIN);
        assert_eq!(Severity::new(5).unwrap(), Severity::MAX);
    }

    #[test]
    fn test_normalized() {
        assert_eq!(Severity::MAX.normalized(), 1.0);
        assert_eq!(Severity::new(2).unwrap().normalized(), 0.4);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Severity>("7").is_err());
        assert_eq!(serde_json::from_str::<Severity>("3").unwrap().level(), 3);
    }
}
