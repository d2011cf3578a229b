//! Ruleset types for eligibility evaluation.
//!
//! This module contains the strongly-typed ruleset structures. A [`RulesetFile`]
//! is what gets deserialized from YAML; a [`Ruleset`] is the validated,
//! immutable form the engine reads from.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::JobCategory;

/// Identifying information about a ruleset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesetMetadata {
    /// The human-readable name of the ruleset.
    pub name: String,
    /// The version label (typically the threshold year).
    pub version: String,
    /// The date from which the thresholds apply.
    pub effective_date: NaiveDate,
}

/// Jurisdiction-specific overtime provisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionRule {
    /// The jurisdiction's minimum annual salary for exemption.
    pub threshold: Decimal,
    /// Description of extra provisions (daily overtime, tiered thresholds).
    pub note: String,
}

/// Ruleset file structure as deserialized from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesetFile {
    /// Ruleset metadata.
    pub ruleset: RulesetMetadata,
    /// The federal baseline salary threshold (annual).
    pub federal_salary_threshold: Decimal,
    /// Standard weekly hours before overtime.
    pub weekly_hours_threshold: Decimal,
    /// Map of jurisdiction code to its rule.
    #[serde(default)]
    pub jurisdictions: HashMap<String, JurisdictionRule>,
    /// Map of job category identifier to exemption weight.
    #[serde(default)]
    pub job_category_weights: HashMap<String, i32>,
}

/// The validated ruleset consulted by the engine.
///
/// Jurisdiction codes are stored upper-cased. A jurisdiction without an entry
/// follows the federal baseline, and a job category without a weight counts
/// as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    metadata: RulesetMetadata,
    federal_salary_threshold: Decimal,
    weekly_hours_threshold: Decimal,
    jurisdictions: HashMap<String, JurisdictionRule>,
    job_category_weights: HashMap<JobCategory, i32>,
}

impl Ruleset {
    /// Creates a new Ruleset from its component parts.
    pub fn new(
        metadata: RulesetMetadata,
        federal_salary_threshold: Decimal,
        weekly_hours_threshold: Decimal,
        jurisdictions: HashMap<String, JurisdictionRule>,
        job_category_weights: HashMap<JobCategory, i32>,
    ) -> Self {
        let jurisdictions = jurisdictions
            .into_iter()
            .map(|(code, rule)| (normalize_code(&code), rule))
            .collect();
        Self {
            metadata,
            federal_salary_threshold,
            weekly_hours_threshold,
            jurisdictions,
            job_category_weights,
        }
    }

    /// Returns the ruleset metadata.
    pub fn metadata(&self) -> &RulesetMetadata {
        &self.metadata
    }

    /// Returns the federal baseline salary threshold.
    pub fn federal_salary_threshold(&self) -> Decimal {
        self.federal_salary_threshold
    }

    /// Returns the standard weekly hours threshold.
    pub fn weekly_hours_threshold(&self) -> Decimal {
        self.weekly_hours_threshold
    }

    /// Looks up the rule for a jurisdiction code, ignoring case and whitespace.
    pub fn jurisdiction(&self, code: &str) -> Option<&JurisdictionRule> {
        self.jurisdictions.get(&normalize_code(code))
    }

    /// Returns the number of jurisdictions with special rules.
    pub fn jurisdiction_count(&self) -> usize {
        self.jurisdictions.len()
    }

    /// Returns the exemption weight for a job category (zero if unmapped).
    pub fn job_category_weight(&self, category: JobCategory) -> i32 {
        self.job_category_weights
            .get(&category)
            .copied()
            .unwrap_or(0)
    }
}

impl TryFrom<RulesetFile> for Ruleset {
    type Error = EngineError;

    fn try_from(file: RulesetFile) -> Result<Self, Self::Error> {
        if file.federal_salary_threshold <= Decimal::ZERO {
            return Err(invalid("federal_salary_threshold must be positive"));
        }
        if file.weekly_hours_threshold <= Decimal::ZERO {
            return Err(invalid("weekly_hours_threshold must be positive"));
        }

        for (code, rule) in &file.jurisdictions {
            if code.trim().is_empty() {
                return Err(invalid("jurisdiction codes must not be empty"));
            }
            if rule.threshold <= Decimal::ZERO {
                return Err(invalid(format!(
                    "threshold for jurisdiction '{}' must be positive",
                    code
                )));
            }
        }

        let mut weights = HashMap::with_capacity(file.job_category_weights.len());
        for (slug, weight) in file.job_category_weights {
            let category = JobCategory::from_slug(&slug)
                .ok_or_else(|| invalid(format!("unknown job category '{}'", slug)))?;
            weights.insert(category, weight);
        }

        Ok(Ruleset::new(
            file.ruleset,
            file.federal_salary_threshold,
            file.weekly_hours_threshold,
            file.jurisdictions,
            weights,
        ))
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidRuleset {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> RulesetMetadata {
        RulesetMetadata {
            name: "Test".to_string(),
            version: "2026".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        }
    }

    fn file() -> RulesetFile {
        RulesetFile {
            ruleset: metadata(),
            federal_salary_threshold: Decimal::new(58656, 0),
            weekly_hours_threshold: Decimal::new(40, 0),
            jurisdictions: HashMap::from([(
                "ca".to_string(),
                JurisdictionRule {
                    threshold: Decimal::new(66560, 0),
                    note: "Daily overtime".to_string(),
                },
            )]),
            job_category_weights: HashMap::from([
                ("outside-sales".to_string(), 30),
                ("retail".to_string(), -15),
            ]),
        }
    }

    #[test]
    fn test_jurisdiction_lookup_normalizes_codes() {
        let ruleset = Ruleset::try_from(file()).unwrap();
        assert!(ruleset.jurisdiction("CA").is_some());
        assert!(ruleset.jurisdiction(" ca ").is_some());
        assert!(ruleset.jurisdiction("TX").is_none());
        assert_eq!(ruleset.jurisdiction_count(), 1);
    }

    #[test]
    fn test_unmapped_job_category_weight_is_zero() {
        let ruleset = Ruleset::try_from(file()).unwrap();
        assert_eq!(ruleset.job_category_weight(JobCategory::OutsideSales), 30);
        assert_eq!(ruleset.job_category_weight(JobCategory::Retail), -15);
        assert_eq!(ruleset.job_category_weight(JobCategory::Computer), 0);
    }

    #[test]
    fn test_rejects_non_positive_federal_threshold() {
        let mut bad = file();
        bad.federal_salary_threshold = Decimal::ZERO;
        let err = Ruleset::try_from(bad).unwrap_err();
        assert!(matches!(err, EngineError::InvalidRuleset { .. }));
        assert!(err.to_string().contains("federal_salary_threshold"));
    }

    #[test]
    fn test_rejects_non_positive_weekly_hours_threshold() {
        let mut bad = file();
        bad.weekly_hours_threshold = Decimal::new(-40, 0);
        assert!(Ruleset::try_from(bad).is_err());
    }

    #[test]
    fn test_rejects_blank_jurisdiction_code() {
        let mut bad = file();
        bad.jurisdictions.insert(
            "  ".to_string(),
            JurisdictionRule {
                threshold: Decimal::new(1, 0),
                note: String::new(),
            },
        );
        let err = Ruleset::try_from(bad).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_rejects_unknown_job_category_key() {
        let mut bad = file();
        bad.job_category_weights.insert("astronaut".to_string(), 5);
        let err = Ruleset::try_from(bad).unwrap_err();
        assert!(err.to_string().contains("astronaut"));
    }

    #[test]
    fn test_rejects_zero_jurisdiction_threshold() {
        let mut bad = file();
        bad.jurisdictions.insert(
            "NY".to_string(),
            JurisdictionRule {
                threshold: Decimal::ZERO,
                note: "x".to_string(),
            },
        );
        let err = Ruleset::try_from(bad).unwrap_err();
        assert!(err.to_string().contains("'NY'"));
    }
}
