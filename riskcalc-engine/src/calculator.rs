//! Risk/reward calculator.
//!
//! Derives stop-loss and take-profit prices from an entry price, the capital
//! committed, a risk specification and a risk:reward ratio.
//!
//! # Formula
//!
//! ```text
//! tokens           = capital / entry_price
//! risk_amount      = percent / 100 × capital   (or the fixed amount)
//! risk_per_token   = risk_amount / tokens
//! reward_per_token = risk_per_token × reward_ratio
//! stop_loss        = entry_price − risk_per_token      (4 dp)
//! take_profit      = entry_price + reward_per_token    (4 dp)
//! ```
//!
//! Arithmetic is plain `f64` in exactly this order; rounding is applied only
//! when the result is built.

use crate::error::{EngineError, EngineResult};
use crate::policy::ValidationPolicy;
use crate::rounding::to_fixed;
use riskcalc_domain::{CalculationInput, CalculationResult};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Stateless risk/reward calculator
///
/// Holds only its validation policy, so it is `Copy` and can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskRewardCalculator {
    policy: ValidationPolicy,
}

impl RiskRewardCalculator {
    /// Create a calculator with the given validation policy
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Active validation policy
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Compute stop-loss, take-profit and effective risk amount
    ///
    /// # Example
    ///
    /// ```
    /// # use riskcalc_domain::{CalculationInput, RiskSpec};
    /// # use riskcalc_engine::RiskRewardCalculator;
    /// # use rust_decimal_macros::dec;
    /// let input = CalculationInput::new(100.0, 1000.0, RiskSpec::Percent { percent: 1.3 }, 2.7);
    /// let result = RiskRewardCalculator::default().compute(&input).unwrap();
    ///
    /// assert_eq!(result.stop_loss, dec!(98.7000));
    /// assert_eq!(result.take_profit, dec!(103.5100));
    /// assert_eq!(result.effective_risk_amount, dec!(13.00));
    /// ```
    ///
    /// # Errors
    /// - `EngineError::Domain` if the policy rejects the input
    /// - `EngineError::NumericDegeneracy` if any quantity is non-finite or a
    ///   level cannot be held at its fixed scale
    pub fn compute(&self, input: &CalculationInput) -> EngineResult<CalculationResult> {
        self.policy.check(input)?;

        let tokens = finite("tokens", input.tokens())?;
        let risk_amount = finite("risk amount", input.risk_amount())?;
        let risk_per_token = finite("risk per token", risk_amount / tokens)?;
        let reward_per_token = finite("reward per token", risk_per_token * input.reward_ratio)?;

        let stop_loss = input.entry_price - risk_per_token;
        let take_profit = input.entry_price + reward_per_token;

        debug!(
            policy = %self.policy,
            tokens,
            risk_amount,
            risk_per_token,
            reward_per_token,
            stop_loss,
            take_profit,
            "Computed risk/reward levels"
        );

        if stop_loss <= 0.0 {
            warn!(
                risk_amount,
                capital = input.capital,
                stop_loss,
                "Risk amount reaches the full notional value; stop-loss is not a positive price"
            );
        }

        Ok(CalculationResult {
            stop_loss: fixed("stop-loss", stop_loss, CalculationResult::PRICE_SCALE)?,
            take_profit: fixed("take-profit", take_profit, CalculationResult::PRICE_SCALE)?,
            effective_risk_amount: fixed(
                "risk amount",
                risk_amount,
                CalculationResult::AMOUNT_SCALE,
            )?,
        })
    }
}

/// Compute with the default (strict) policy
pub fn compute(input: &CalculationInput) -> EngineResult<CalculationResult> {
    RiskRewardCalculator::default().compute(input)
}

fn finite(quantity: &'static str, value: f64) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::NumericDegeneracy { quantity, value })
    }
}

fn fixed(quantity: &'static str, value: f64, scale: u32) -> EngineResult<Decimal> {
    to_fixed(value, scale).ok_or(EngineError::NumericDegeneracy { quantity, value })
}

// =============================================================================
// Tests
// =============================================================================
