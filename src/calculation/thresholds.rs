//! Salary threshold resolution and jurisdiction notes.
//!
//! This module resolves the effective salary threshold for a jurisdiction by
//! taking the greater of the federal baseline and any jurisdiction override.
//! Unknown jurisdiction codes follow the federal baseline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::Ruleset;

use super::assessment::FactorAssessment;
use super::currency::format_usd;

/// Factor name for the jurisdiction note.
pub const STATE_RULES_FACTOR: &str = "State Rules";

/// Note used for jurisdictions without special rules.
pub const FEDERAL_ONLY_NOTE: &str = "This state generally follows federal FLSA overtime rules";

/// The thresholds that apply to a jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionThresholds {
    /// The federal baseline salary threshold.
    pub federal: Decimal,
    /// The jurisdiction's own threshold, if it has special rules.
    pub state: Option<Decimal>,
    /// `max(federal, state)`, or the federal figure when there is no override.
    pub effective: Decimal,
    /// Whether the jurisdiction has rules beyond the federal baseline.
    pub has_special_rules: bool,
    /// Human-readable description of the jurisdiction's provisions.
    pub note: String,
}

/// Resolves the thresholds for a jurisdiction code.
///
/// # Examples
///
/// ```
/// use overtime_eligibility::calculation::resolve_thresholds;
/// use overtime_eligibility::config::builtin_ruleset;
/// use rust_decimal::Decimal;
///
/// let ca = resolve_thresholds("CA", builtin_ruleset());
/// assert_eq!(ca.effective, Decimal::new(66560, 0));
/// assert!(ca.has_special_rules);
///
/// let tx = resolve_thresholds("TX", builtin_ruleset());
/// assert_eq!(tx.effective, Decimal::new(58656, 0));
/// assert!(!tx.has_special_rules);
/// ```
pub fn resolve_thresholds(jurisdiction: &str, ruleset: &Ruleset) -> JurisdictionThresholds {
    let federal = ruleset.federal_salary_threshold();

    match ruleset.jurisdiction(jurisdiction) {
        Some(rule) => JurisdictionThresholds {
            federal,
            state: Some(rule.threshold),
            effective: federal.max(rule.threshold),
            has_special_rules: true,
            note: rule.note.clone(),
        },
        None => JurisdictionThresholds {
            federal,
            state: None,
            effective: federal,
            has_special_rules: false,
            note: FEDERAL_ONLY_NOTE.to_string(),
        },
    }
}

/// Records the jurisdiction's provisions as an informational factor.
pub fn describe_jurisdiction(thresholds: &JurisdictionThresholds) -> FactorAssessment {
    let explanation = match thresholds.state {
        Some(state) if state > thresholds.federal => format!(
            "{}. The state salary threshold of {} exceeds the federal {}.",
            thresholds.note,
            format_usd(state),
            format_usd(thresholds.federal)
        ),
        Some(_) => format!(
            "{}. The federal salary threshold of {} applies.",
            thresholds.note,
            format_usd(thresholds.federal)
        ),
        None => format!("{}.", thresholds.note),
    };

    FactorAssessment::informational(STATE_RULES_FACTOR, explanation)
}
