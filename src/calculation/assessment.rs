//! The common result type returned by each scoring step.

use serde::{Deserialize, Serialize};

use crate::models::{EligibilityFactor, FactorStatus};

/// The outcome of assessing one input dimension.
///
/// Carries the explanation factor shown to the user and the amount the
/// dimension adds to (or removes from) the eligibility score. The factor's
/// status always agrees with the sign of `score_delta`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorAssessment {
    /// The explanation factor for this dimension.
    pub factor: EligibilityFactor,
    /// Contribution to the eligibility score.
    pub score_delta: i32,
}

impl FactorAssessment {
    /// Builds an assessment whose status is derived from the score delta.
    pub fn scored(name: &str, score_delta: i32, explanation: impl Into<String>) -> Self {
        Self {
            factor: EligibilityFactor {
                factor: name.to_string(),
                status: FactorStatus::from_score_delta(score_delta),
                explanation: explanation.into(),
            },
            score_delta,
        }
    }

    /// Builds a neutral, informational assessment.
    pub fn informational(name: &str, explanation: impl Into<String>) -> Self {
        Self::scored(name, 0, explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scored_status_follows_sign() {
        assert_eq!(
            FactorAssessment::scored("A", 15, "x").factor.status,
            FactorStatus::Favorable
        );
        assert_eq!(
            FactorAssessment::scored("A", -20, "x").factor.status,
            FactorStatus::Unfavorable
        );
    }

    #[test]
    fn test_informational_is_neutral_with_zero_delta() {
        let assessment = FactorAssessment::informational("Weekly Hours", "40 hours");
        assert_eq!(assessment.score_delta, 0);
        assert_eq!(assessment.factor.status, FactorStatus::Neutral);
        assert_eq!(assessment.factor.factor, "Weekly Hours");
        assert_eq!(assessment.factor.explanation, "40 hours");
    }
}
