//! Weekly hours reporting.
//!
//! Hours worked are informational only: they never change the eligibility
//! score or the qualitative result.

use rust_decimal::Decimal;

use super::assessment::FactorAssessment;

/// Factor name for the weekly hours assessment.
pub const WEEKLY_HOURS_FACTOR: &str = "Weekly Hours";

/// Returns the hours worked above the weekly threshold, never negative.
///
/// Saturates instead of overflowing for extreme inputs.
///
/// # Examples
///
/// ```
/// use overtime_eligibility::calculation::hours_over_threshold;
/// use rust_decimal::Decimal;
///
/// let forty = Decimal::new(40, 0);
/// assert_eq!(hours_over_threshold(Decimal::new(55, 0), forty), Decimal::new(15, 0));
/// assert_eq!(hours_over_threshold(Decimal::new(30, 0), forty), Decimal::ZERO);
/// ```
pub fn hours_over_threshold(weekly_hours: Decimal, threshold: Decimal) -> Decimal {
    weekly_hours.saturating_sub(threshold).max(Decimal::ZERO)
}

/// Describes the worker's weekly hours relative to the threshold.
pub fn assess_weekly_hours(weekly_hours: Decimal, threshold: Decimal) -> FactorAssessment {
    let over = hours_over_threshold(weekly_hours, threshold);

    let explanation = if over > Decimal::ZERO {
        format!(
            "You work {} hours per week, {} over the {}-hour standard. If eligible, those hours are payable at 1.5 times your regular rate.",
            weekly_hours.normalize(),
            over.normalize(),
            threshold.normalize()
        )
    } else {
        format!(
            "You work {} hours per week, which does not exceed the {}-hour standard.",
            weekly_hours.normalize(),
            threshold.normalize()
        )
    };

    FactorAssessment::informational(WEEKLY_HOURS_FACTOR, explanation)
}
