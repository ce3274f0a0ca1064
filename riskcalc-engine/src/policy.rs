//! Input validation policy.
//!
//! `Strict` checks every range invariant before any arithmetic. `PresenceOnly`
//! trusts whatever numbers the form produced and leaves degenerate values to
//! be caught on the output side.

use crate::error::EngineError;
use riskcalc_domain::{CalculationInput, DomainError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much the calculator checks before computing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationPolicy {
    /// Reject non-positive, non-finite and out-of-range values
    #[default]
    Strict,
    /// Accept any parsed number; only degenerate outputs are rejected
    PresenceOnly,
}

impl ValidationPolicy {
    /// Apply the policy to an input
    ///
    /// # Errors
    /// Under `Strict`, returns the first invariant violation.
    pub fn check(&self, input: &CalculationInput) -> Result<(), DomainError> {
        match self {
            ValidationPolicy::Strict => input.validate(),
            ValidationPolicy::PresenceOnly => Ok(()),
        }
    }
}

impl FromStr for ValidationPolicy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(ValidationPolicy::Strict),
            "presence-only" | "presence_only" | "presence" => Ok(ValidationPolicy::PresenceOnly),
            other => Err(EngineError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationPolicy::Strict => write!(f, "strict"),
            ValidationPolicy::PresenceOnly => write!(f, "presence-only"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskcalc_domain::RiskSpec;

    #[test]
    fn test_policy_parse() {
        assert_eq!("strict".parse::<ValidationPolicy>().unwrap(), ValidationPolicy::Strict);
        assert_eq!(
            "presence-only".parse::<ValidationPolicy>().unwrap(),
            ValidationPolicy::PresenceOnly
        );
        assert_eq!(
            "PRESENCE_ONLY".parse::<ValidationPolicy>().unwrap(),
            ValidationPolicy::PresenceOnly
        );
        assert!(matches!(
            "loose".parse::<ValidationPolicy>(),
            Err(EngineError::UnknownPolicy(_))
        ));
    }

    #[test]
    fn test_policy_default_is_strict() {
        assert_eq!(ValidationPolicy::default(), ValidationPolicy::Strict);
        assert_eq!(ValidationPolicy::default().to_string(), "strict");
    }

    #[test]
    fn test_strict_rejects_out_of_range() {
        let input = CalculationInput::new(100.0, 1000.0, RiskSpec::Percent { percent: 150.0 }, 2.0);
        assert!(ValidationPolicy::Strict.check(&input).is_err());
        assert!(ValidationPolicy::PresenceOnly.check(&input).is_ok());
    }

    #[test]
    fn test_presence_only_accepts_anything() {
        let input = CalculationInput::new(-1.0, 0.0, RiskSpec::Fixed { amount: -5.0 }, f64::NAN);
        assert!(ValidationPolicy::PresenceOnly.check(&input).is_ok());
    }
}
