//! Test helpers for Riskcalc.
//!
//! Provides the reference calculation scenarios and a builder for raw forms.

mod helpers;

pub use helpers::{
    reference_scenarios, scenario_fixed_small_entry, scenario_percent, FormBuilder, Scenario,
};
