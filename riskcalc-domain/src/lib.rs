//! Riskcalc Domain Layer
//!
//! Pure domain logic with zero I/O dependencies.
//! Contains the calculation input/result values and the raw form they are parsed from.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod calculation;
pub mod form;
pub mod value_objects;

// Re-export commonly used types
pub use calculation::{CalculationInput, CalculationResult};
pub use form::CalculationForm;
pub use value_objects::{DomainError, FormField, RiskKind, RiskSpec};
