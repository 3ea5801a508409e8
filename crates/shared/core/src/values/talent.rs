use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A creator's exogenous skill level, always within `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Talent(f64);

impl Talent {
    /// Create a talent value, rejecting anything outside `[0, 1]` (including NaN)
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidInput(format!(
                "talent must be between 0 and 1, got {value}"
            )))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Talent {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Talent> for f64 {
    fn from(talent: Talent) -> Self {
        talent.0
    }
}

impl std::fmt::Display for Talent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bounds() {
        assert_eq!(Talent::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Talent::new(1.0).unwrap().value(), 1.0);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(Talent::new(1.5), Err(Error::InvalidInput(_))));
        assert!(matches!(Talent::new(-0.01), Err(Error::InvalidInput(_))));
        assert!(matches!(Talent::new(f64::NAN), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<Talent>("0.25").is_ok());
        assert!(serde_json::from_str::<Talent>("2.0").is_err());
    }
}
