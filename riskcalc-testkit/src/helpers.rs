//! Scenario fixtures and form builders.

use riskcalc_domain::{
    CalculationForm, CalculationInput, CalculationResult, FormField, RiskKind, RiskSpec,
};
use rust_decimal_macros::dec;

/// A known input together with its expected result.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Short name used in assertion messages
    pub name: &'static str,
    /// Numeric input
    pub input: CalculationInput,
    /// Expected rounded result
    pub expected: CalculationResult,
}

impl Scenario {
    /// The same scenario as a filled-in raw form
    pub fn form(&self) -> CalculationForm {
        FormBuilder::new()
            .entry_price(self.input.entry_price.to_string())
            .capital(self.input.capital.to_string())
            .risk(self.input.risk.kind(), self.input.risk.value().to_string())
            .reward_ratio(self.input.reward_ratio.to_string())
            .build()
    }
}

/// Entry 0.7983, capital 100, fixed risk 5, ratio 1:2.
pub fn scenario_fixed_small_entry() -> Scenario {
    Scenario {
        name: "fixed risk, sub-unit entry",
        input: CalculationInput::new(0.7983, 100.0, RiskSpec::Fixed { amount: 5.0 }, 2.0),
        expected: CalculationResult {
            stop_loss: dec!(0.7584),
            take_profit: dec!(0.8781),
            effective_risk_amount: dec!(5.00),
        },
    }
}

/// Entry 100, capital 1000, 1.3% risk, ratio 1:2.7.
pub fn scenario_percent() -> Scenario {
    Scenario {
        name: "percent risk",
        input: CalculationInput::new(100.0, 1000.0, RiskSpec::Percent { percent: 1.3 }, 2.7),
        expected: CalculationResult {
            stop_loss: dec!(98.7000),
            take_profit: dec!(103.5100),
            effective_risk_amount: dec!(13.00),
        },
    }
}

/// All reference scenarios.
pub fn reference_scenarios() -> Vec<Scenario> {
    vec![
        scenario_fixed_small_entry(),
        scenario_percent(),
        Scenario {
            name: "large entry, 1% of capital",
            input: CalculationInput::new(95000.0, 10000.0, RiskSpec::Percent { percent: 1.0 }, 3.0),
            expected: CalculationResult {
                // 100 risk over 0.10526... tokens = 950 per token
                stop_loss: dec!(94050.0000),
                take_profit: dec!(97850.0000),
                effective_risk_amount: dec!(100.00),
            },
        },
        Scenario {
            name: "fractional ratio",
            input: CalculationInput::new(20.0, 400.0, RiskSpec::Fixed { amount: 8.0 }, 0.5),
            expected: CalculationResult {
                // 8 risk over 20 tokens = 0.4 per token
                stop_loss: dec!(19.6000),
                take_profit: dec!(20.2000),
                effective_risk_amount: dec!(8.00),
            },
        },
    ]
}

/// Builder for [`CalculationForm`], starting from an empty form.
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    form: CalculationForm,
}

impl FormBuilder {
    /// Start from an empty form (fixed risk selected)
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the fixed-risk reference form
    pub fn reference() -> Self {
        Self::new()
            .entry_price("0.7983")
            .capital("100")
            .risk(RiskKind::Fixed, "5")
            .reward_ratio("2")
    }

    /// Set the entry price text
    pub fn entry_price(mut self, text: impl Into<String>) -> Self {
        self.form.entry_price = Some(text.into());
        self
    }

    /// Set the capital text
    pub fn capital(mut self, text: impl Into<String>) -> Self {
        self.form.capital = Some(text.into());
        self
    }

    /// Set the risk selector and text
    pub fn risk(mut self, kind: RiskKind, text: impl Into<String>) -> Self {
        self.form.risk_kind = kind;
        self.form.risk = Some(text.into());
        self
    }

    /// Set the risk:reward ratio text
    pub fn reward_ratio(mut self, text: impl Into<String>) -> Self {
        self.form.reward_ratio = Some(text.into());
        self
    }

    /// Blank out the given field
    pub fn clear(mut self, field: FormField) -> Self {
        match field {
            FormField::EntryPrice => self.form.entry_price = None,
            FormField::Capital => self.form.capital = None,
            FormField::Risk => self.form.risk = None,
            FormField::RewardRatio => self.form.reward_ratio = None,
        }
        self
    }

    /// Finish the form
    pub fn build(self) -> CalculationForm {
        self.form
    }
}
