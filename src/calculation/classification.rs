//! Three-way eligibility classification.

use rust_decimal::Decimal;

use crate::models::{EligibilityInput, EligibilityResult, ExemptStatus, PayType};

use super::salary_threshold::is_below_threshold;

/// Classifies an input against the effective salary threshold.
///
/// Branches are checked in order, and the exemption check comes first:
///
/// 1. Reported exempt, salaried, and paid at or above the threshold:
///    [`EligibilityResult::LikelyExempt`].
/// 2. Hourly, reported non-exempt, or salaried below the threshold:
///    [`EligibilityResult::LikelyEligible`].
/// 3. Anything else (salaried at or above the threshold, unsure):
///    [`EligibilityResult::PossiblyEligible`].
///
/// Weekly hours and job category play no part.
///
/// # Example
///
/// ```
/// use overtime_eligibility::calculation::classify;
/// use overtime_eligibility::models::{
///     EligibilityInput, EligibilityResult, ExemptStatus, JobCategory, PayType,
/// };
/// use rust_decimal::Decimal;
///
/// let input = EligibilityInput {
///     job_category: JobCategory::Administrative,
///     pay_type: PayType::Salary,
///     pay_amount: Decimal::new(70000, 0),
///     weekly_hours: Decimal::new(45, 0),
///     jurisdiction: "TX".to_string(),
///     exempt_status: ExemptStatus::Yes,
/// };
/// assert_eq!(
///     classify(&input, Decimal::new(58656, 0)),
///     EligibilityResult::LikelyExempt
/// );
/// ```
pub fn classify(input: &EligibilityInput, effective_threshold: Decimal) -> EligibilityResult {
    let salaried = input.pay_type == PayType::Salary;
    let below = is_below_threshold(input.pay_amount, effective_threshold);

    if input.exempt_status == ExemptStatus::Yes && salaried && !below {
        EligibilityResult::LikelyExempt
    } else if input.pay_type == PayType::Hourly
        || input.exempt_status == ExemptStatus::No
        || (salaried && below)
    {
        EligibilityResult::LikelyEligible
    } else {
        EligibilityResult::PossiblyEligible
    }
}
