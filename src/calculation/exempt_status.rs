//! Self-reported exempt status scoring.

use crate::models::ExemptStatus;

use super::assessment::FactorAssessment;

/// Factor name for the exempt status assessment.
pub const EXEMPT_STATUS_FACTOR: &str = "Exempt Classification";

/// Score added when the worker reports a non-exempt classification.
pub const NON_EXEMPT_SCORE: i32 = 15;

/// Score added when the worker reports an exempt classification.
pub const EXEMPT_SCORE: i32 = -20;

/// Assesses the worker's self-reported classification.
///
/// "No" (non-exempt) favors eligibility, "yes" opposes it, and "unsure" is
/// neutral.
pub fn assess_exempt_status(status: ExemptStatus) -> FactorAssessment {
    match status {
        ExemptStatus::No => FactorAssessment::scored(
            EXEMPT_STATUS_FACTOR,
            NON_EXEMPT_SCORE,
            "You report being classified as non-exempt, so your employer treats you as entitled to overtime.",
        ),
        ExemptStatus::Yes => FactorAssessment::scored(
            EXEMPT_STATUS_FACTOR,
            EXEMPT_SCORE,
            "You report being classified as exempt. Employers can misclassify workers, so salary level and duties still matter.",
        ),
        ExemptStatus::Unsure => FactorAssessment::informational(
            EXEMPT_STATUS_FACTOR,
            "Your classification is unknown. It is usually stated in your offer letter or employment agreement.",
        ),
    }
}
