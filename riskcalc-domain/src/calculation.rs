//! Calculation input and result values.
//!
//! Both are transient, immutable values: an input is built fresh per call and
//! a result is handed back by value.

use crate::value_objects::{DomainError, RiskSpec};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CalculationInput
// =============================================================================

/// Parameters of a single risk/reward calculation
///
/// Fields are plain `f64` so that the arithmetic follows IEEE-754 semantics.
/// `new` performs no checks; use `new_validated` (or `validate`) to enforce
/// the invariants below.
///
/// # Invariants (validated form)
/// - `entry_price`, `capital`, `reward_ratio` finite and > 0
/// - `risk` satisfies [`RiskSpec::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Price per unit of the asset at entry
    pub entry_price: f64,
    /// Capital allocated to the position
    pub capital: f64,
    /// Fixed or percentage risk
    pub risk: RiskSpec,
    /// Reward per unit as a multiple of risk per unit (1:X)
    pub reward_ratio: f64,
}

impl CalculationInput {
    /// Create an input without validation
    pub fn new(entry_price: f64, capital: f64, risk: RiskSpec, reward_ratio: f64) -> Self {
        Self { entry_price, capital, risk, reward_ratio }
    }

    /// Create an input, enforcing all invariants
    ///
    /// # Examples
    /// ```
    /// # use riskcalc_domain::{CalculationInput, RiskSpec};
    /// let input =
    ///     CalculationInput::new_validated(0.7983, 100.0, RiskSpec::Fixed { amount: 5.0 }, 2.0);
    /// assert!(input.is_ok());
    ///
    /// let zero_entry =
    ///     CalculationInput::new_validated(0.0, 100.0, RiskSpec::Fixed { amount: 5.0 }, 2.0);
    /// assert!(zero_entry.is_err());
    /// ```
    ///
    /// # Errors
    /// Returns `DomainError::InvalidInput` if any invariant is violated.
    pub fn new_validated(
        entry_price: f64,
        capital: f64,
        risk: RiskSpec,
        reward_ratio: f64,
    ) -> Result<Self, DomainError> {
        let input = Self::new(entry_price, capital, risk, reward_ratio);
        input.validate()?;
        Ok(input)
    }

    /// Validate the input
    ///
    /// # Errors
    /// Returns `DomainError::InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_positive("Entry price", self.entry_price)?;
        require_positive("Capital", self.capital)?;
        self.risk.validate()?;
        require_positive("Risk:reward ratio", self.reward_ratio)?;
        Ok(())
    }

    /// Notional position size in units of the asset (`capital / entry_price`)
    pub fn tokens(&self) -> f64 {
        self.capital / self.entry_price
    }

    /// Risk amount in currency units
    pub fn risk_amount(&self) -> f64 {
        self.risk.risk_amount(self.capital)
    }
}

fn require_positive(name: &str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DomainError::InvalidInput(format!("{} must be positive, got {}", name, value)));
    }
    Ok(())
}

impl fmt::Display for CalculationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CalculationInput {{ entry: {}, capital: {}, risk: {}, rr: 1:{} }}",
            self.entry_price, self.capital, self.risk, self.reward_ratio
        )
    }
}

// =============================================================================
// CalculationResult
// =============================================================================

/// Output of a risk/reward calculation, ready for display
///
/// Values carry a fixed scale: prices [`Self::PRICE_SCALE`] decimal places,
/// the risk amount [`Self::AMOUNT_SCALE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Exit price bounding the loss
    pub stop_loss: Decimal,
    /// Target exit price
    pub take_profit: Decimal,
    /// Risk amount actually applied, in currency units
    pub effective_risk_amount: Decimal,
}

impl CalculationResult {
    /// Decimal places of stop-loss and take-profit
    pub const PRICE_SCALE: u32 = 4;

    /// Decimal places of the effective risk amount
    pub const AMOUNT_SCALE: u32 = 2;

    /// Distance from entry to stop-loss
    pub fn risk_per_unit(&self, entry_price: Decimal) -> Decimal {
        entry_price - self.stop_loss
    }

    /// Distance from entry to take-profit
    pub fn reward_per_unit(&self, entry_price: Decimal) -> Decimal {
        self.take_profit - entry_price
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stop-loss {}, take-profit {}, risk {}",
            self.stop_loss, self.take_profit, self.effective_risk_amount
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fixed(amount: f64) -> RiskSpec {
        RiskSpec::Fixed { amount }
    }

    #[test]
    fn test_input_validation() {
        // Valid
        assert!(CalculationInput::new_validated(0.7983, 100.0, fixed(5.0), 2.0).is_ok());
        assert!(
            CalculationInput::new_validated(100.0, 1000.0, RiskSpec::Percent { percent: 1.3 }, 2.7)
                .is_ok()
        );

        // Invalid: zero entry price
        assert!(CalculationInput::new_validated(0.0, 100.0, fixed(5.0), 2.0).is_err());

        // Invalid: negative capital
        assert!(CalculationInput::new_validated(1.0, -100.0, fixed(5.0), 2.0).is_err());

        // Invalid: zero ratio
        assert!(CalculationInput::new_validated(1.0, 100.0, fixed(5.0), 0.0).is_err());

        // Invalid: non-finite entry
        assert!(CalculationInput::new_validated(f64::NAN, 100.0, fixed(5.0), 2.0).is_err());

        // Invalid: risk spec
        assert!(CalculationInput::new_validated(1.0, 100.0, fixed(0.0), 2.0).is_err());
    }

    #[test]
    fn test_validation_names_field() {
        let err = CalculationInput::new(1.0, 0.0, fixed(5.0), 2.0).validate().unwrap_err();
        assert_eq!(err, DomainError::InvalidInput("Capital must be positive, got 0".to_string()));
    }

    #[test]
    fn test_fixed_amount_above_capital_is_accepted() {
        // Not bounded above by capital; sanity-checking is left to the caller
        assert!(CalculationInput::new_validated(10.0, 100.0, fixed(500.0), 2.0).is_ok());
    }

    #[test]
    fn test_new_does_not_validate() {
        let input = CalculationInput::new(0.0, 0.0, fixed(-1.0), -2.0);
        assert_eq!(input.entry_price, 0.0);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_tokens_and_risk_amount() {
        let input = CalculationInput::new(100.0, 1000.0, RiskSpec::Percent { percent: 2.0 }, 2.0);
        assert_eq!(input.tokens(), 10.0);
        assert_eq!(input.risk_amount(), 20.0);
    }

    #[test]
    fn test_result_distances() {
        let result = CalculationResult {
            stop_loss: dec!(98.7000),
            take_profit: dec!(103.5100),
            effective_risk_amount: dec!(13.00),
        };
        assert_eq!(result.risk_per_unit(dec!(100)), dec!(1.3));
        assert_eq!(result.reward_per_unit(dec!(100)), dec!(3.51));
    }

    #[test]
    fn test_result_serializes_decimals_as_strings() {
        let result = CalculationResult {
            stop_loss: dec!(0.7584),
            take_profit: dec!(0.8781),
            effective_risk_amount: dec!(5.00),
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["stop_loss"], "0.7584");
        assert_eq!(json["effective_risk_amount"], "5.00");
    }
}
