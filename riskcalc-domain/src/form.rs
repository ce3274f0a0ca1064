//! Raw calculation form.
//!
//! Holds the four fields exactly as the user typed them, plus the risk type
//! selector, and turns them into a [`CalculationInput`].

use crate::calculation::CalculationInput;
use crate::value_objects::{DomainError, FormField, RiskKind, RiskSpec};
use serde::{Deserialize, Serialize};

/// Unparsed user input
///
/// Absent and blank fields are treated the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationForm {
    /// Entry price text
    pub entry_price: Option<String>,
    /// Capital text
    pub capital: Option<String>,
    /// Risk selector (fixed amount or percent of capital)
    #[serde(default)]
    pub risk_kind: RiskKind,
    /// Risk amount or percentage text
    pub risk: Option<String>,
    /// Risk:reward ratio text
    pub reward_ratio: Option<String>,
}

impl CalculationForm {
    /// Text currently held for `field`
    pub fn field(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::EntryPrice => self.entry_price.as_deref(),
            FormField::Capital => self.capital.as_deref(),
            FormField::Risk => self.risk.as_deref(),
            FormField::RewardRatio => self.reward_ratio.as_deref(),
        }
    }

    /// Fields that are absent or blank, in form order
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| self.field(*f).map_or(true, |text| text.trim().is_empty()))
            .collect()
    }

    /// Parse the form into a calculation input
    ///
    /// Only presence and numeric syntax are checked here; range checks belong
    /// to the calculator's validation policy.
    ///
    /// # Errors
    /// - `DomainError::MissingFields` if any field is absent or blank
    /// - `DomainError::InvalidInput` if a field is not a number
    pub fn parse(&self) -> Result<CalculationInput, DomainError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(DomainError::MissingFields(missing));
        }

        let entry_price = self.parse_number(FormField::EntryPrice)?;
        let capital = self.parse_number(FormField::Capital)?;
        let risk = self.parse_number(FormField::Risk)?;
        let reward_ratio = self.parse_number(FormField::RewardRatio)?;

        Ok(CalculationInput::new(
            entry_price,
            capital,
            RiskSpec::from_kind(self.risk_kind, risk),
            reward_ratio,
        ))
    }

    fn parse_number(&self, field: FormField) -> Result<f64, DomainError> {
        let text = self.field(field).unwrap_or_default().trim();
        text.parse::<f64>().map_err(|_| {
            DomainError::InvalidInput(format!("{} is not a number: '{}'", field, text))
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> CalculationForm {
        CalculationForm {
            entry_price: Some("0.7983".to_string()),
            capital: Some("100".to_string()),
            risk_kind: RiskKind::Fixed,
            risk: Some("5".to_string()),
            reward_ratio: Some("2".to_string()),
        }
    }

    #[test]
    fn test_parse_complete_form() -> anyhow::Result<()> {
        let input = complete_form().parse()?;

        assert_eq!(input.entry_price, 0.7983);
        assert_eq!(input.capital, 100.0);
        assert_eq!(input.risk, RiskSpec::Fixed { amount: 5.0 });
        assert_eq!(input.reward_ratio, 2.0);
        Ok(())
    }

    #[test]
    fn test_parse_percent_form() -> anyhow::Result<()> {
        let form = CalculationForm {
            risk_kind: RiskKind::Percent,
            risk: Some("1.3".to_string()),
            ..complete_form()
        };
        assert_eq!(form.parse()?.risk, RiskSpec::Percent { percent: 1.3 });
        Ok(())
    }

    #[test]
    fn test_parse_trims_whitespace() -> anyhow::Result<()> {
        let form = CalculationForm { capital: Some("  250 \n".to_string()), ..complete_form() };
        assert_eq!(form.parse()?.capital, 250.0);
        Ok(())
    }

    #[test]
    fn test_missing_each_field() {
        for field in FormField::ALL {
            let mut form = complete_form();
            match field {
                FormField::EntryPrice => form.entry_price = None,
                FormField::Capital => form.capital = Some(String::new()),
                FormField::Risk => form.risk = Some("   ".to_string()),
                FormField::RewardRatio => form.reward_ratio = None,
            }

            assert_eq!(form.parse(), Err(DomainError::MissingFields(vec![field])));
        }
    }

    #[test]
    fn test_empty_form_reports_all_fields() {
        let err = CalculationForm::default().parse().unwrap_err();
        assert_eq!(err, DomainError::MissingFields(FormField::ALL.to_vec()));
    }

    #[test]
    fn test_zero_is_present() {
        // "0" is a value, not a blank field
        let form = CalculationForm { entry_price: Some("0".to_string()), ..complete_form() };
        assert!(form.missing_fields().is_empty());
        assert_eq!(form.parse().unwrap().entry_price, 0.0);
    }

    #[test]
    fn test_non_numeric_field() {
        let form = CalculationForm { reward_ratio: Some("two".to_string()), ..complete_form() };
        let err = form.parse().unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidInput("risk:reward ratio is not a number: 'two'".to_string())
        );
    }

    #[test]
    fn test_negative_values_parse() {
        // Range checks are not the form's job
        let form = CalculationForm { risk: Some("-5".to_string()), ..complete_form() };
        assert_eq!(form.parse().unwrap().risk, RiskSpec::Fixed { amount: -5.0 });
    }
}
