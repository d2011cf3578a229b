//! Eligibility calculation logic.
//!
//! This module contains the eligibility engine: threshold resolution, one
//! scoring function per input dimension, the three-way classification, and
//! the [`evaluate`] entry point that assembles them into an output record.

mod assessment;
mod classification;
mod currency;
mod engine;
mod exempt_status;
mod job_category;
mod pay_type;
mod salary_threshold;
mod thresholds;
mod weekly_hours;

pub use assessment::FactorAssessment;
pub use classification::classify;
pub use currency::format_usd;
pub use engine::{evaluate, evaluate_with_ruleset};
pub use exempt_status::{EXEMPT_SCORE, EXEMPT_STATUS_FACTOR, NON_EXEMPT_SCORE, assess_exempt_status};
pub use job_category::{JOB_CATEGORY_FACTOR, assess_job_category};
pub use pay_type::{HOURLY_SCORE, PAY_TYPE_FACTOR, assess_pay_type};
pub use salary_threshold::{
    AT_OR_ABOVE_THRESHOLD_SCORE, BELOW_THRESHOLD_SCORE, SALARY_THRESHOLD_FACTOR,
    assess_salary_threshold, is_below_threshold,
};
pub use thresholds::{
    FEDERAL_ONLY_NOTE, JurisdictionThresholds, STATE_RULES_FACTOR, describe_jurisdiction,
    resolve_thresholds,
};
pub use weekly_hours::{WEEKLY_HOURS_FACTOR, assess_weekly_hours, hours_over_threshold};
