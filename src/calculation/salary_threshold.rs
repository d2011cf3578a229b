//! Salary-versus-threshold scoring.
//!
//! This module compares a salaried worker's annual pay with the effective
//! salary threshold. Pay below the threshold rules out the salary-based
//! exemptions; pay at or above it leaves exemption to the duties test.

use rust_decimal::Decimal;

use crate::models::PayType;

use super::assessment::FactorAssessment;
use super::currency::format_usd;

/// Factor name for the salary threshold assessment.
pub const SALARY_THRESHOLD_FACTOR: &str = "Salary Threshold";

/// Score added when salary is below the effective threshold.
pub const BELOW_THRESHOLD_SCORE: i32 = 15;

/// Score added when salary meets or exceeds the effective threshold.
pub const AT_OR_ABOVE_THRESHOLD_SCORE: i32 = -20;

/// Returns true if the pay amount is below the effective threshold.
///
/// Equality counts as meeting the threshold.
pub fn is_below_threshold(pay_amount: Decimal, effective_threshold: Decimal) -> bool {
    pay_amount < effective_threshold
}

/// Assesses a worker's pay against the effective salary threshold.
///
/// Only salaried pay is compared. Hourly pay produces a neutral factor.
///
/// # Examples
///
/// ```
/// use overtime_eligibility::calculation::assess_salary_threshold;
/// use overtime_eligibility::models::{FactorStatus, PayType};
/// use rust_decimal::Decimal;
///
/// let below = assess_salary_threshold(
///     PayType::Salary,
///     Decimal::new(50000, 0),
///     Decimal::new(58656, 0),
/// );
/// assert_eq!(below.factor.status, FactorStatus::Favorable);
///
/// let above = assess_salary_threshold(
///     PayType::Salary,
///     Decimal::new(70000, 0),
///     Decimal::new(58656, 0),
/// );
/// assert_eq!(above.factor.status, FactorStatus::Unfavorable);
/// ```
pub fn assess_salary_threshold(
    pay_type: PayType,
    pay_amount: Decimal,
    effective_threshold: Decimal,
) -> FactorAssessment {
    match pay_type {
        PayType::Hourly => FactorAssessment::informational(
            SALARY_THRESHOLD_FACTOR,
            format!(
                "The salary threshold of {} applies to salaried pay, not hourly pay.",
                format_usd(effective_threshold)
            ),
        ),
        PayType::Salary if is_below_threshold(pay_amount, effective_threshold) => {
            FactorAssessment::scored(
                SALARY_THRESHOLD_FACTOR,
                BELOW_THRESHOLD_SCORE,
                format!(
                    "Your salary of {} is below the effective threshold of {}, so the salary-based exemptions do not apply.",
                    format_usd(pay_amount),
                    format_usd(effective_threshold)
                ),
            )
        }
        PayType::Salary => FactorAssessment::scored(
            SALARY_THRESHOLD_FACTOR,
            AT_OR_ABOVE_THRESHOLD_SCORE,
            format!(
                "Your salary of {} meets the effective threshold of {}, so exemption depends on your job duties.",
                format_usd(pay_amount),
                format_usd(effective_threshold)
            ),
        ),
    }
}
