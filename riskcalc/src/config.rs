//! CLI configuration.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Command-line flags override whatever is loaded here; a variable shadowed
//! by a flag is never read.

use crate::error::{CliError, CliResult};
use riskcalc_domain::RiskKind;
use riskcalc_engine::ValidationPolicy;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Configuration
// =============================================================================

/// Validation policy variable
pub const ENV_VALIDATION: &str = "RISKCALC_VALIDATION";
/// Default risk type variable
pub const ENV_RISK_TYPE: &str = "RISKCALC_RISK_TYPE";
/// Output format variable
pub const ENV_OUTPUT: &str = "RISKCALC_OUTPUT";
/// Currency symbol variable
pub const ENV_CURRENCY_SYMBOL: &str = "RISKCALC_CURRENCY_SYMBOL";
/// Log format variable
pub const ENV_LOG_FORMAT: &str = "RISKCALC_LOG_FORMAT";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Input validation policy
    pub validation: ValidationPolicy,

    /// Risk selector used when none is given on the command line
    pub default_risk_kind: RiskKind,

    /// Output configuration
    pub output: OutputConfig,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Result format on stdout
    pub format: OutputFormat,
    /// Symbol prefixed to currency values in text output
    pub currency_symbol: String,
    /// Log line format on stderr
    pub log_format: LogFormat,
}

/// Result format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// JSON document
    Json,
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per line
    Json,
}

impl Config {
    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `Cli::load_config` feeds this from the process environment.
    pub fn from_lookup<F>(lookup: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let validation = Self::load_parsed(&lookup, ENV_VALIDATION, defaults.validation)?;
        let default_risk_kind =
            Self::load_parsed(&lookup, ENV_RISK_TYPE, defaults.default_risk_kind)?;
        let format = Self::load_parsed(&lookup, ENV_OUTPUT, defaults.output.format)?;
        let log_format = Self::load_parsed(&lookup, ENV_LOG_FORMAT, defaults.output.log_format)?;
        let currency_symbol =
            lookup(ENV_CURRENCY_SYMBOL).unwrap_or(defaults.output.currency_symbol);

        Ok(Self {
            validation,
            default_risk_kind,
            output: OutputConfig {
                format,
                currency_symbol,
                log_format,
            },
        })
    }

    /// Create test configuration.
    pub fn test() -> Self {
        Self {
            validation: ValidationPolicy::Strict,
            default_risk_kind: RiskKind::Fixed,
            output: OutputConfig {
                format: OutputFormat::Text,
                currency_symbol: "$".to_string(),
                log_format: LogFormat::Pretty,
            },
        }
    }

    fn load_parsed<F, T>(lookup: &F, key: &str, default: T) -> CliResult<T>
    where
        F: Fn(&str) -> Option<String>,
        T: FromStr,
    {
        match lookup(key) {
            Some(val) => val
                .parse::<T>()
                .map_err(|_| CliError::Config(format!("Invalid {} value: {}", key, val))),
            None => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validation: ValidationPolicy::default(),
            default_risk_kind: RiskKind::default(),
            output: OutputConfig {
                format: OutputFormat::Text,
                currency_symbol: "$".to_string(),
                log_format: LogFormat::Pretty,
            },
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::Config(format!(
                "Invalid output format: {}. Expected: text, json",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(CliError::Config(format!(
                "Invalid log format: {}. Expected: pretty, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
