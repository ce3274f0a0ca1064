//! CLI error types.

use riskcalc_domain::DomainError;
use riskcalc_engine::EngineError;
use thiserror::Error;

/// CLI-level errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Form could not be parsed
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Calculation failed
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output could not be serialized
    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
