//! Command-line arguments.
//!
//! Field flags are optional at the parser level; presence is checked by the
//! form so that a missing field is reported the same way however it is left out.

use crate::config::{Config, OutputFormat, ENV_OUTPUT, ENV_RISK_TYPE, ENV_VALIDATION};
use crate::error::CliResult;
use clap::Parser;
use std::env;
use riskcalc_domain::{CalculationForm, RiskKind};
use riskcalc_engine::ValidationPolicy;

#[derive(Debug, Clone, Parser)]
#[command(name = "riskcalc")]
#[command(
    about = "Risk-Reward Calculator - stop-loss and take-profit levels from entry, capital and risk"
)]
#[command(version)]
pub struct Cli {
    /// Entry price per unit (e.g. 0.7983)
    #[arg(short, long, allow_hyphen_values = true)]
    pub entry_price: Option<String>,

    /// Capital in currency units (e.g. 100)
    #[arg(short, long, allow_hyphen_values = true)]
    pub capital: Option<String>,

    /// Risk amount, or percentage of capital with --risk-type percent (e.g. 5 or 1.3)
    #[arg(short, long, allow_hyphen_values = true)]
    pub risk: Option<String>,

    /// How --risk is interpreted: fixed or percent [default: fixed]
    #[arg(short = 't', long)]
    pub risk_type: Option<RiskKind>,

    /// Risk:reward ratio 1:X (e.g. 2 or 2.7)
    #[arg(short = 'x', long, allow_hyphen_values = true)]
    pub rr_ratio: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Validation policy: strict or presence-only
    #[arg(long)]
    pub validation: Option<ValidationPolicy>,

    /// Currency symbol for text output
    #[arg(long)]
    pub currency: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load configuration from the environment (and `.env`), then apply flags
    pub fn load_config(&self) -> CliResult<Config> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        self.config_from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, then apply flags
    ///
    /// Variables shadowed by a flag are not read, so an invalid value there
    /// cannot fail the run.
    pub fn config_from_lookup<F>(&self, lookup: F) -> CliResult<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let shadowed = self.shadowed_env_keys();
        let config = Config::from_lookup(|key| {
            if shadowed.iter().any(|k| *k == key) {
                None
            } else {
                lookup(key)
            }
        })?;
        Ok(self.apply(config))
    }

    fn shadowed_env_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.validation.is_some() {
            keys.push(ENV_VALIDATION);
        }
        if self.risk_type.is_some() {
            keys.push(ENV_RISK_TYPE);
        }
        if self.format.is_some() {
            keys.push(ENV_OUTPUT);
        }
        keys
    }

    /// Apply command-line overrides on top of loaded configuration
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(policy) = self.validation {
            config.validation = policy;
        }
        if let Some(kind) = self.risk_type {
            config.default_risk_kind = kind;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(symbol) = &self.currency {
            config.output.currency_symbol = symbol.clone();
        }
        config
    }

    /// Raw form built from the field flags
    pub fn form(&self, config: &Config) -> CalculationForm {
        CalculationForm {
            entry_price: self.entry_price.clone(),
            capital: self.capital.clone(),
            risk_kind: self.risk_type.unwrap_or(config.default_risk_kind),
            risk: self.risk.clone(),
            reward_ratio: self.rr_ratio.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("riskcalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_all_fields() {
        let cli = parse(&[
            "--entry-price", "0.7983", "--capital", "100", "--risk", "5", "--rr-ratio", "2",
        ]);

        let form = cli.form(&Config::default());
        assert_eq!(form.entry_price.as_deref(), Some("0.7983"));
        assert_eq!(form.capital.as_deref(), Some("100"));
        assert_eq!(form.risk.as_deref(), Some("5"));
        assert_eq!(form.reward_ratio.as_deref(), Some("2"));
        assert_eq!(form.risk_kind, RiskKind::Fixed);
    }

    #[test]
    fn test_short_flags() {
        let cli = parse(&["-e", "100", "-c", "1000", "-r", "1.3", "-t", "percent", "-x", "2.7"]);

        let form = cli.form(&Config::default());
        assert_eq!(form.risk_kind, RiskKind::Percent);
        assert_eq!(form.reward_ratio.as_deref(), Some("2.7"));
    }

    #[test]
    fn test_missing_fields_parse_as_none() {
        let cli = parse(&["--capital", "100"]);
        let form = cli.form(&Config::default());

        assert!(form.entry_price.is_none());
        assert_eq!(form.missing_fields().len(), 3);
    }

    #[test]
    fn test_negative_values_accepted_by_parser() {
        let cli = parse(&["--risk", "-5"]);
        assert_eq!(cli.risk.as_deref(), Some("-5"));
    }

    #[test]
    fn test_invalid_risk_type_rejected() {
        let result = Cli::try_parse_from(["riskcalc", "--risk-type", "ratio"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_risk_type_falls_back_to_config() {
        let cli = parse(&[]);
        let config = Config { default_risk_kind: RiskKind::Percent, ..Config::default() };

        assert_eq!(cli.form(&config).risk_kind, RiskKind::Percent);
    }

    #[test]
    fn test_apply_overrides() {
        let cli = parse(&[
            "--validation",
            "presence-only",
            "--format",
            "json",
            "--currency",
            "€",
            "-t",
            "percent",
        ]);
        let config = cli.apply(Config::default());

        assert_eq!(config.validation, ValidationPolicy::PresenceOnly);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.currency_symbol, "€");
        assert_eq!(config.default_risk_kind, RiskKind::Percent);
    }

    #[test]
    fn test_apply_without_flags_keeps_config() {
        let config = Config { validation: ValidationPolicy::PresenceOnly, ..Config::default() };
        assert_eq!(parse(&[]).apply(config.clone()), config);
    }
}
