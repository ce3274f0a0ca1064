//! Result rendering.

use crate::config::{OutputConfig, OutputFormat};
use crate::error::CliResult;
use riskcalc_domain::{CalculationInput, CalculationResult};
use serde::Serialize;

/// JSON document: the input echoed back with its result.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// Parsed input
    pub input: &'a CalculationInput,
    /// Rounded levels
    pub result: &'a CalculationResult,
}

/// Render a result in the configured format
pub fn render(
    input: &CalculationInput,
    result: &CalculationResult,
    output: &OutputConfig,
) -> CliResult<String> {
    match output.format {
        OutputFormat::Text => Ok(render_text(result, &output.currency_symbol)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&Report { input, result })?),
    }
}

fn render_text(result: &CalculationResult, symbol: &str) -> String {
    format!(
        "Effective Risk Amount: {symbol}{}\nStop-Loss: {symbol}{}\nTake-Profit: {symbol}{}",
        result.effective_risk_amount, result.stop_loss, result.take_profit
    )
}
