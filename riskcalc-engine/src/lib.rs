//! Riskcalc Engine Layer
//!
//! Pure decision logic, deterministic, no I/O.
//! Takes a calculation input → returns stop-loss, take-profit and effective risk.

#![warn(clippy::all)]

pub mod calculator;
pub mod error;
pub mod policy;
pub mod rounding;

pub use calculator::{compute, RiskRewardCalculator};
pub use error::{EngineError, EngineResult};
pub use policy::ValidationPolicy;
