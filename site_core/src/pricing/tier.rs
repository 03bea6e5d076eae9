//! Service tier definitions
//!
//! Each tier carries a fixed per-square-inch rate and a minimum charge.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SiteError;
use crate::units::{Dollars, DollarsPerSqIn};

/// Pricing category chosen with the `service` radio group
///
/// # Example
/// ```
/// use site_core::pricing::ServiceTier;
///
/// let tier: ServiceTier = "premium".parse().unwrap();
/// assert_eq!(tier.rate().0, 0.015);
/// assert_eq!(tier.minimum_price().0, 7.50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTier {
    #[default]
    Basic,
    Premium,
}

impl ServiceTier {
    pub const ALL: [ServiceTier; 2] = [ServiceTier::Basic, ServiceTier::Premium];

    /// Price per square inch of surface
    pub fn rate(&self) -> DollarsPerSqIn {
        match self {
            ServiceTier::Basic => DollarsPerSqIn(0.01),
            ServiceTier::Premium => DollarsPerSqIn(0.015),
        }
    }

    /// Floor applied after rounding
    pub fn minimum_price(&self) -> Dollars {
        match self {
            ServiceTier::Basic => Dollars(5.00),
            ServiceTier::Premium => Dollars(7.50),
        }
    }

    /// Value used by the radio input
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceTier::Basic => "basic",
            ServiceTier::Premium => "premium",
        }
    }
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceTier {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "basic" => Ok(ServiceTier::Basic),
            "premium" => Ok(ServiceTier::Premium),
            other => Err(SiteError::unknown_tier(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tiers() {
        for tier in ServiceTier::ALL {
            assert_eq!(tier.as_str().parse::<ServiceTier>().unwrap(), tier);
        }
        assert!("gold".parse::<ServiceTier>().is_err());
    }

    #[test]
    fn test_tier_constants() {
        assert_eq!(ServiceTier::Basic.rate(), DollarsPerSqIn(0.01));
        assert_eq!(ServiceTier::Basic.minimum_price(), Dollars(5.0));
        assert_eq!(ServiceTier::Premium.rate(), DollarsPerSqIn(0.015));
        assert_eq!(ServiceTier::Premium.minimum_price(), Dollars(7.5));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ServiceTier::Premium).unwrap(), "\"premium\"");
    }
}
