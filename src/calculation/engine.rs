//! The eligibility evaluation entry points.
//!
//! Evaluation is a pure function of the input and the ruleset: it reads only
//! immutable tables, holds no state between calls, and never fails. Nonsense
//! inputs (negative pay, more than 168 hours) still produce a deterministic
//! answer; rejecting them is the caller's job.

use rust_decimal::Decimal;

use crate::config::{Ruleset, builtin_ruleset};
use crate::models::{EligibilityInput, EligibilityOutput, ThresholdFacts};

use super::assessment::FactorAssessment;
use super::classification::classify;
use super::exempt_status::assess_exempt_status;
use super::job_category::assess_job_category;
use super::pay_type::assess_pay_type;
use super::salary_threshold::assess_salary_threshold;
use super::thresholds::{describe_jurisdiction, resolve_thresholds};
use super::weekly_hours::{assess_weekly_hours, hours_over_threshold};

/// Evaluates an input against the built-in ruleset.
///
/// # Example
///
/// ```
/// use overtime_eligibility::calculation::evaluate;
/// use overtime_eligibility::models::{
///     EligibilityInput, EligibilityResult, ExemptStatus, JobCategory, PayType,
/// };
/// use rust_decimal::Decimal;
///
/// let input = EligibilityInput {
///     job_category: JobCategory::Administrative,
///     pay_type: PayType::Salary,
///     pay_amount: Decimal::new(50000, 0),
///     weekly_hours: Decimal::new(45, 0),
///     jurisdiction: "TX".to_string(),
///     exempt_status: ExemptStatus::Unsure,
/// };
///
/// let output = evaluate(&input);
/// assert_eq!(output.result, EligibilityResult::LikelyEligible);
/// assert_eq!(output.thresholds.effective_threshold, Decimal::new(58656, 0));
/// assert_eq!(output.thresholds.hours_over_threshold, Decimal::new(5, 0));
/// ```
pub fn evaluate(input: &EligibilityInput) -> EligibilityOutput {
    evaluate_with_ruleset(input, builtin_ruleset())
}

/// Evaluates an input against the given ruleset.
///
/// Factors are emitted in a fixed order: pay type, exempt classification,
/// salary threshold, job category, state rules, weekly hours.
pub fn evaluate_with_ruleset(input: &EligibilityInput, ruleset: &Ruleset) -> EligibilityOutput {
    let thresholds = resolve_thresholds(&input.jurisdiction, ruleset);
    let weekly_threshold = ruleset.weekly_hours_threshold();

    let assessments: [FactorAssessment; 6] = [
        assess_pay_type(input.pay_type),
        assess_exempt_status(input.exempt_status),
        assess_salary_threshold(input.pay_type, input.pay_amount, thresholds.effective),
        assess_job_category(input.job_category, ruleset),
        describe_jurisdiction(&thresholds),
        assess_weekly_hours(input.weekly_hours, weekly_threshold),
    ];

    let score = assessments
        .iter()
        .fold(0i32, |acc, a| acc.saturating_add(a.score_delta));
    let result = classify(input, thresholds.effective);
    let hours_over: Decimal = hours_over_threshold(input.weekly_hours, weekly_threshold);

    EligibilityOutput {
        result,
        result_label: result.label().to_string(),
        summary: result.summary().to_string(),
        score,
        factors: assessments.into_iter().map(|a| a.factor).collect(),
        thresholds: ThresholdFacts {
            federal_threshold: thresholds.federal,
            state_threshold: thresholds.state,
            effective_threshold: thresholds.effective,
            state_has_special_rules: thresholds.has_special_rules,
            weekly_hours_threshold: weekly_threshold,
            hours_over_threshold: hours_over,
        },
        jurisdiction_note: thresholds.note,
    }
}
