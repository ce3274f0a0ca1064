//! Value Objects for the Riskcalc Domain
//!
//! Immutable domain primitives shared by the calculator and its callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Domain errors for input parsing and validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// One or more required form fields are empty
    #[error("Please fill in all fields (missing: {})", join_fields(.0))]
    MissingFields(Vec<FormField>),

    /// A field is non-numeric or violates a domain invariant
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unknown risk type selector
    #[error("Invalid risk type: {0} (expected: fixed, percent)")]
    InvalidRiskKind(String),
}

fn join_fields(fields: &[FormField]) -> String {
    fields.iter().map(|f| f.label()).collect::<Vec<_>>().join(", ")
}

// =============================================================================
// FormField
// =============================================================================

/// The four user-supplied fields of a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// Entry price per unit of the asset
    EntryPrice,
    /// Capital allocated to the position
    Capital,
    /// Risk amount or risk percentage, depending on [`RiskKind`]
    Risk,
    /// Risk:reward multiplier (1:X)
    RewardRatio,
}

impl FormField {
    /// All fields, in form order
    pub const ALL: [FormField; 4] =
        [FormField::EntryPrice, FormField::Capital, FormField::Risk, FormField::RewardRatio];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            FormField::EntryPrice => "entry price",
            FormField::Capital => "capital",
            FormField::Risk => "risk",
            FormField::RewardRatio => "risk:reward ratio",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// RiskKind
// =============================================================================

/// How the risk field is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskKind {
    /// Fixed amount in currency units
    #[default]
    Fixed,
    /// Percentage of capital
    Percent,
}

impl FromStr for RiskKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(RiskKind::Fixed),
            "percent" => Ok(RiskKind::Percent),
            other => Err(DomainError::InvalidRiskKind(other.to_string())),
        }
    }
}

impl fmt::Display for RiskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskKind::Fixed => write!(f, "fixed"),
            RiskKind::Percent => write!(f, "percent"),
        }
    }
}

// =============================================================================
// RiskSpec
// =============================================================================

/// Risk specification: a fixed currency amount or a percentage of capital
///
/// # Example
///
/// ```
/// # use riskcalc_domain::value_objects::RiskSpec;
/// assert_eq!(RiskSpec::Fixed { amount: 5.0 }.risk_amount(100.0), 5.0);
/// assert_eq!(RiskSpec::Percent { percent: 2.0 }.risk_amount(1000.0), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RiskSpec {
    /// Fixed amount in currency units
    Fixed {
        /// Amount the trader is willing to lose
        amount: f64,
    },
    /// Percentage of capital (1.3 = 1.3%)
    Percent {
        /// Share of capital the trader is willing to lose
        percent: f64,
    },
}

impl RiskSpec {
    /// Build a spec from the selector and the numeric risk field
    pub fn from_kind(kind: RiskKind, value: f64) -> Self {
        match kind {
            RiskKind::Fixed => RiskSpec::Fixed { amount: value },
            RiskKind::Percent => RiskSpec::Percent { percent: value },
        }
    }

    /// Selector this spec was built from
    pub fn kind(&self) -> RiskKind {
        match self {
            RiskSpec::Fixed { .. } => RiskKind::Fixed,
            RiskSpec::Percent { .. } => RiskKind::Percent,
        }
    }

    /// Raw numeric value as entered (amount or percent)
    pub fn value(&self) -> f64 {
        match *self {
            RiskSpec::Fixed { amount } => amount,
            RiskSpec::Percent { percent } => percent,
        }
    }

    /// Risk amount in currency units
    ///
    /// Percent: `(percent / 100) * capital`. Fixed: the amount itself.
    pub fn risk_amount(&self, capital: f64) -> f64 {
        match *self {
            RiskSpec::Fixed { amount } => amount,
            RiskSpec::Percent { percent } => (percent / 100.0) * capital,
        }
    }

    /// Check the strict invariants of the risk value
    ///
    /// # Errors
    /// Returns `DomainError::InvalidInput` if:
    /// - The value is not finite or <= 0
    /// - A percentage exceeds 100
    pub fn validate(&self) -> Result<(), DomainError> {
        match *self {
            RiskSpec::Fixed { amount } => {
                if !amount.is_finite() || amount <= 0.0 {
                    return Err(DomainError::InvalidInput(format!(
                        "Risk amount must be positive, got {}",
                        amount
                    )));
                }
            },
            RiskSpec::Percent { percent } => {
                if !percent.is_finite() || percent <= 0.0 {
                    return Err(DomainError::InvalidInput(format!(
                        "Risk percentage must be positive, got {}",
                        percent
                    )));
                }
                if percent > 100.0 {
                    return Err(DomainError::InvalidInput(format!(
                        "Risk percentage cannot exceed 100%, got {}",
                        percent
                    )));
                }
            },
        }
        Ok(())
    }
}

impl fmt::Display for RiskSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskSpec::Fixed { amount } => write!(f, "{} fixed", amount),
            RiskSpec::Percent { percent } => write!(f, "{}% of capital", percent),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
