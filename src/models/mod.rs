//! Core data models for the overtime eligibility engine.
//!
//! This module contains the input and output records exchanged with the engine.

mod input;
mod output;

pub use input::{EligibilityInput, ExemptStatus, JobCategory, PayType};
pub use output::{
    EligibilityFactor, EligibilityOutput, EligibilityResult, FactorStatus, ThresholdFacts,
};
