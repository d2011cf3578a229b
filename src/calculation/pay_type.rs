//! Pay type scoring.

use crate::models::PayType;

use super::assessment::FactorAssessment;

/// Factor name for the pay type assessment.
pub const PAY_TYPE_FACTOR: &str = "Pay Type";

/// Score added for hourly pay.
pub const HOURLY_SCORE: i32 = 25;

/// Assesses how the worker's pay type bears on eligibility.
///
/// Hourly pay favors eligibility. Salaried pay is neutral on its own, since a
/// salaried worker can still be non-exempt.
///
/// # Example
///
/// ```
/// use overtime_eligibility::calculation::assess_pay_type;
/// use overtime_eligibility::models::{FactorStatus, PayType};
///
/// let assessment = assess_pay_type(PayType::Hourly);
/// assert_eq!(assessment.factor.status, FactorStatus::Favorable);
/// ```
pub fn assess_pay_type(pay_type: PayType) -> FactorAssessment {
    match pay_type {
        PayType::Hourly => FactorAssessment::scored(
            PAY_TYPE_FACTOR,
            HOURLY_SCORE,
            "Hourly workers are generally non-exempt and entitled to overtime for hours over 40 per week.",
        ),
        PayType::Salary => FactorAssessment::informational(
            PAY_TYPE_FACTOR,
            "Salaried workers may be exempt or non-exempt depending on salary level and job duties.",
        ),
    }
}
