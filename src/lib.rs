//! Overtime Eligibility Estimator
//!
//! This crate estimates whether a worker is likely entitled to overtime pay
//! under US wage-and-hour rules, given self-reported job category, pay,
//! weekly hours, state, and exempt classification. It is an informational
//! estimator, not a legal determination.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
