//! The ruleset compiled into the engine.
//!
//! Thresholds reflect the 2026 federal salary level. The tables are built once
//! on first use and never written again.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::JobCategory;

use super::types::{JurisdictionRule, Ruleset, RulesetMetadata};

/// Federal minimum annual salary for the white-collar exemptions.
pub const FEDERAL_SALARY_THRESHOLD: Decimal = Decimal::from_parts(58656, 0, 0, false, 0);

/// Standard weekly hours before federal overtime accrues.
pub const STANDARD_WEEKLY_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

static BUILTIN: LazyLock<Ruleset> = LazyLock::new(build);

/// Returns the built-in ruleset.
///
/// # Example
///
/// ```
/// use overtime_eligibility::config::{builtin_ruleset, FEDERAL_SALARY_THRESHOLD};
///
/// let ruleset = builtin_ruleset();
/// assert_eq!(ruleset.federal_salary_threshold(), FEDERAL_SALARY_THRESHOLD);
/// assert!(ruleset.jurisdiction("CA").is_some());
/// assert!(ruleset.jurisdiction("TX").is_none());
/// ```
pub fn builtin_ruleset() -> &'static Ruleset {
    &BUILTIN
}

fn build() -> Ruleset {
    let metadata = RulesetMetadata {
        name: "FLSA Overtime Eligibility (Simplified)".to_string(),
        version: "2026".to_string(),
        effective_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default(),
    };

    let jurisdictions = [
        (
            "CA",
            66560,
            "California may require daily overtime after 8 hours and has a higher salary threshold",
        ),
        (
            "NY",
            62400,
            "New York has higher salary thresholds for certain industries",
        ),
        (
            "WA",
            69500,
            "Washington has tiered salary thresholds based on employer size",
        ),
        (
            "CO",
            57500,
            "Colorado has specific overtime rules for certain job types",
        ),
        ("AK", 58656, "Alaska may require daily overtime after 8 hours"),
        (
            "NV",
            58656,
            "Nevada may require daily overtime after 8 hours depending on wage level",
        ),
    ]
    .into_iter()
    .map(|(code, threshold, note)| {
        (
            code.to_string(),
            JurisdictionRule {
                threshold: Decimal::new(threshold, 0),
                note: note.to_string(),
            },
        )
    })
    .collect();

    let weights = HashMap::from([
        (JobCategory::Executive, 25),
        (JobCategory::Administrative, 20),
        (JobCategory::Professional, 20),
        (JobCategory::Computer, 15),
        (JobCategory::OutsideSales, 30),
        (JobCategory::Retail, -15),
        (JobCategory::Manufacturing, -20),
        (JobCategory::FoodService, -20),
        (JobCategory::HealthcareNonexempt, -15),
        (JobCategory::Construction, -20),
        (JobCategory::Other, 0),
    ]);

    Ruleset::new(
        metadata,
        FEDERAL_SALARY_THRESHOLD,
        STANDARD_WEEKLY_HOURS,
        jurisdictions,
        weights,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_federal_threshold_constant() {
        assert_eq!(FEDERAL_SALARY_THRESHOLD, Decimal::new(58656, 0));
        assert_eq!(STANDARD_WEEKLY_HOURS, Decimal::new(40, 0));
    }

    #[test]
    fn test_builtin_jurisdiction_thresholds() {
        let ruleset = builtin_ruleset();
        let expected = [
            ("CA", 66560),
            ("NY", 62400),
            ("WA", 69500),
            ("CO", 57500),
            ("AK", 58656),
            ("NV", 58656),
        ];
        for (code, threshold) in expected {
            let rule = ruleset.jurisdiction(code).unwrap();
            assert_eq!(rule.threshold, Decimal::new(threshold, 0), "{}", code);
            assert!(!rule.note.is_empty());
        }
        assert_eq!(ruleset.jurisdiction_count(), expected.len());
    }

    #[test]
    fn test_builtin_weights_cover_every_category() {
        let ruleset = builtin_ruleset();
        assert_eq!(ruleset.job_category_weight(JobCategory::OutsideSales), 30);
        assert_eq!(ruleset.job_category_weight(JobCategory::Executive), 25);
        assert_eq!(ruleset.job_category_weight(JobCategory::Construction), -20);
        assert_eq!(ruleset.job_category_weight(JobCategory::Other), 0);
    }

    #[test]
    fn test_builtin_metadata() {
        let metadata = builtin_ruleset().metadata();
        assert_eq!(metadata.version, "2026");
        assert_eq!(
            metadata.effective_date,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(builtin_ruleset(), builtin_ruleset()));
    }
}
