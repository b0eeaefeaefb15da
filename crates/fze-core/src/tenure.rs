//! # License Tenure
//!
//! The license validity period a founder commits to. Only three tenure
//! buckets are priced; each carries a sub-linear multiplier that discounts
//! longer commitments:
//!
//! | Tenure  | Multiplier | Basis points |
//! |---------|------------|--------------|
//! | 1 year  | ×1.0       | 10 000       |
//! | 3 years | ×2.8       | 28 000       |
//! | 5 years | ×4.5       | 45 000       |
//!
//! Any other number of years is an input error.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A priced license tenure bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Tenure {
    /// Single-year license.
    OneYear,
    /// Three-year license.
    ThreeYears,
    /// Five-year license.
    FiveYears,
}

impl Tenure {
    /// Resolve a tenure bucket from a number of years.
    pub fn from_years(years: u32) -> Result<Self, ValidationError> {
        match years {
            1 => Ok(Self::OneYear),
            3 => Ok(Self::ThreeYears),
            5 => Ok(Self::FiveYears),
            other => Err(ValidationError::UnsupportedTenure(other)),
        }
    }

    /// Number of years covered.
    pub fn years(self) -> u32 {
        match self {
            Self::OneYear => 1,
            Self::ThreeYears => 3,
            Self::FiveYears => 5,
        }
    }

    /// Price multiplier in basis points.
    pub fn multiplier_bps(self) -> u32 {
        match self {
            Self::OneYear => 10_000,
            Self::ThreeYears => 28_000,
            Self::FiveYears => 45_000,
        }
    }

    /// All priced tenure buckets, shortest first.
    pub fn all() -> &'static [Tenure] {
        &[Self::OneYear, Self::ThreeYears, Self::FiveYears]
    }
}

impl TryFrom<u32> for Tenure {
    type Error = ValidationError;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        Self::from_years(years)
    }
}

impl From<Tenure> for u32 {
    fn from(tenure: Tenure) -> Self {
        tenure.years()
    }
}

impl std::fmt::Display for Tenure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.years() {
            1 => f.write_str("1 year"),
            n => write!(f, "{n} years"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_buckets_resolve() {
        assert_eq!(Tenure::from_years(1).unwrap(), Tenure::OneYear);
        assert_eq!(Tenure::from_years(3).unwrap(), Tenure::ThreeYears);
        assert_eq!(Tenure::from_years(5).unwrap(), Tenure::FiveYears);
    }

    #[test]
    fn unsupported_years_rejected() {
        for years in [0, 2, 4, 6, 10] {
            assert_eq!(
                Tenure::from_years(years),
                Err(ValidationError::UnsupportedTenure(years))
            );
        }
    }

    #[test]
    fn multipliers_are_sub_linear() {
        for tenure in Tenure::all() {
            assert!(tenure.multiplier_bps() <= tenure.years() * 10_000);
        }
        assert_eq!(Tenure::ThreeYears.multiplier_bps(), 28_000);
        assert_eq!(Tenure::FiveYears.multiplier_bps(), 45_000);
    }

    #[test]
    fn serde_as_years() {
        assert_eq!(serde_json::to_string(&Tenure::ThreeYears).unwrap(), "3");
        let t: Tenure = serde_json::from_str("5").unwrap();
        assert_eq!(t, Tenure::FiveYears);
        assert!(serde_json::from_str::<Tenure>("2").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Tenure::OneYear.to_string(), "1 year");
        assert_eq!(Tenure::FiveYears.to_string(), "5 years");
    }
}
