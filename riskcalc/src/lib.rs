//! Riskcalc CLI Library
//!
//! Command-line front end for the risk/reward calculator.
//!
//! # Architecture
//!
//! ```text
//! CLI flags + env → Config
//!        ↓
//! CalculationForm → parse → CalculationInput
//!        ↓
//! RiskRewardCalculator → CalculationResult → render
//! ```
//!
//! # Components
//!
//! - **Cli**: Argument parsing
//! - **Config**: Environment-based configuration
//! - **Render**: Text and JSON output

#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod render;

// Re-exports for convenience
pub use cli::Cli;
pub use config::{Config, LogFormat, OutputConfig, OutputFormat};
pub use error::{CliError, CliResult};

use riskcalc_engine::RiskRewardCalculator;
use tracing::{debug, info};

/// Run one calculation and return the rendered output
///
/// # Errors
/// Fails with no output when the form is incomplete or non-numeric, or when
/// the calculator rejects the input.
pub fn run(cli: &Cli, config: &Config) -> CliResult<String> {
    let form = cli.form(config);
    let input = form.parse()?;
    debug!(%input, "Parsed calculation form");

    let calculator = RiskRewardCalculator::new(config.validation);
    let result = calculator.compute(&input)?;
    info!(%result, "Calculation complete");

    render::render(&input, &result, &config.output)
}
