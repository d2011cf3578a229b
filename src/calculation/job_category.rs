//! Job category scoring.
//!
//! Each job category carries an exemption weight in the ruleset. The weight is
//! subtracted from the eligibility score: a positive weight (e.g. outside
//! sales) leans exempt, a negative weight (manual and service roles) leans
//! eligible. The category never changes the qualitative result on its own.

use crate::config::Ruleset;
use crate::models::JobCategory;

use super::assessment::FactorAssessment;

/// Factor name for the job category assessment.
pub const JOB_CATEGORY_FACTOR: &str = "Job Category";

/// Assesses the worker's job category using the ruleset's weight table.
///
/// # Example
///
/// ```
/// use overtime_eligibility::calculation::assess_job_category;
/// use overtime_eligibility::config::builtin_ruleset;
/// use overtime_eligibility::models::{FactorStatus, JobCategory};
///
/// let sales = assess_job_category(JobCategory::OutsideSales, builtin_ruleset());
/// assert_eq!(sales.score_delta, -30);
/// assert_eq!(sales.factor.status, FactorStatus::Unfavorable);
/// ```
pub fn assess_job_category(category: JobCategory, ruleset: &Ruleset) -> FactorAssessment {
    let weight = ruleset.job_category_weight(category);
    let score_delta = weight.saturating_neg();

    let explanation = match weight {
        w if w > 0 => format!(
            "{} roles often qualify for an exemption when the duties test is met.",
            category.label()
        ),
        w if w < 0 => format!(
            "{} roles are typically non-exempt and paid overtime.",
            category.label()
        ),
        _ => format!(
            "{} roles have no typical exemption pattern; your duties decide.",
            category.label()
        ),
    };

    FactorAssessment::scored(JOB_CATEGORY_FACTOR, score_delta, explanation)
}
