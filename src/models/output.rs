//! Eligibility output models.
//!
//! This module contains the [`EligibilityOutput`] type and the structures it is
//! made of: the qualitative result, the ordered explanation factors, and the
//! threshold comparison figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The qualitative eligibility outcome.
///
/// # Example
///
/// ```
/// use overtime_eligibility::models::EligibilityResult;
///
/// assert_eq!(EligibilityResult::LikelyExempt.label(), "Likely Exempt");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityResult {
    /// The worker is likely entitled to overtime pay.
    LikelyEligible,
    /// Entitlement depends on job duties the estimator cannot assess.
    PossiblyEligible,
    /// The worker is likely exempt from overtime.
    LikelyExempt,
}

impl EligibilityResult {
    /// Returns the short label shown as the result badge.
    pub fn label(&self) -> &'static str {
        match self {
            EligibilityResult::LikelyEligible => "Likely Eligible",
            EligibilityResult::PossiblyEligible => "Possibly Eligible",
            EligibilityResult::LikelyExempt => "Likely Exempt",
        }
    }

    /// Returns the one-paragraph summary for this outcome.
    pub fn summary(&self) -> &'static str {
        match self {
            EligibilityResult::LikelyEligible => {
                "Based on the information provided, you are likely entitled to overtime pay \
                 at 1.5 times your regular rate for hours worked over 40 in a workweek."
            }
            EligibilityResult::PossiblyEligible => {
                "Your pay meets the salary threshold, so eligibility depends on whether your \
                 actual job duties meet an exemption test. Review your duties with HR or a \
                 labor professional."
            }
            EligibilityResult::LikelyExempt => {
                "Based on your salary level and reported exempt classification, you are likely \
                 exempt from federal overtime requirements."
            }
        }
    }

    /// Ranks outcomes from most exempt (0) to most eligible (2).
    pub fn eligibility_rank(&self) -> u8 {
        match self {
            EligibilityResult::LikelyExempt => 0,
            EligibilityResult::PossiblyEligible => 1,
            EligibilityResult::LikelyEligible => 2,
        }
    }
}

/// The directional effect a factor has on eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorStatus {
    /// The factor points toward overtime eligibility.
    Favorable,
    /// The factor points toward exemption.
    Unfavorable,
    /// The factor is informational only.
    Neutral,
}

impl FactorStatus {
    /// Derives a status from the sign of a score contribution.
    pub fn from_score_delta(delta: i32) -> Self {
        match delta {
            d if d > 0 => FactorStatus::Favorable,
            d if d < 0 => FactorStatus::Unfavorable,
            _ => FactorStatus::Neutral,
        }
    }
}

/// A single explanation entry in the eligibility breakdown.
///
/// # Example
///
/// ```
/// use overtime_eligibility::models::{EligibilityFactor, FactorStatus};
///
/// let factor = EligibilityFactor {
///     factor: "Pay Type".to_string(),
///     status: FactorStatus::Favorable,
///     explanation: "Hourly workers are generally non-exempt".to_string(),
/// };
/// assert_eq!(factor.status, FactorStatus::Favorable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityFactor {
    /// The name of the factor (e.g., "Pay Type").
    pub factor: String,
    /// The directional effect of this factor.
    pub status: FactorStatus,
    /// Human-readable explanation of how the factor was assessed.
    pub explanation: String,
}

/// The threshold figures used in an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdFacts {
    /// The federal baseline salary threshold (annual).
    pub federal_threshold: Decimal,
    /// The jurisdiction's own salary threshold, if the jurisdiction has rules.
    pub state_threshold: Option<Decimal>,
    /// The greater of the federal and jurisdiction thresholds.
    pub effective_threshold: Decimal,
    /// Whether the jurisdiction has overtime provisions beyond federal rules.
    pub state_has_special_rules: bool,
    /// Standard weekly hours before overtime accrues.
    pub weekly_hours_threshold: Decimal,
    /// Reported weekly hours above the standard threshold (never negative).
    pub hours_over_threshold: Decimal,
}

/// The complete result of an eligibility evaluation.
///
/// Built fresh for each evaluation and never mutated afterwards. Serializing
/// two outputs of the same input yields identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityOutput {
    /// The qualitative outcome.
    pub result: EligibilityResult,
    /// Badge label derived from the outcome.
    pub result_label: String,
    /// Summary paragraph derived from the outcome.
    pub summary: String,
    /// Additive eligibility score; positive leans eligible, negative leans exempt.
    pub score: i32,
    /// Ordered explanation factors.
    pub factors: Vec<EligibilityFactor>,
    /// Threshold comparison figures.
    pub thresholds: ThresholdFacts,
    /// Jurisdiction-specific overtime note.
    pub jurisdiction_note: String,
}

impl EligibilityOutput {
    /// Finds a factor by name.
    pub fn factor(&self, name: &str) -> Option<&EligibilityFactor> {
        self.factors.iter().find(|f| f.factor == name)
    }
}
