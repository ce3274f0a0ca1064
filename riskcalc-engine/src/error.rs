//! Engine error types.

use riskcalc_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while computing a result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Input failed validation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A quantity came out non-finite or too large to represent
    ///
    /// Typically a division by a zero entry price or capital.
    #[error("Numeric degeneracy: {quantity} is {value}")]
    NumericDegeneracy {
        /// Name of the offending quantity (e.g., "tokens", "stop-loss")
        quantity: &'static str,
        /// Offending value
        value: f64,
    },

    /// Unknown validation policy name
    #[error("Unknown validation policy: {0} (expected: strict, presence-only)")]
    UnknownPolicy(String),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
