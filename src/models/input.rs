//! Eligibility input model and its enumerations.
//!
//! This module defines the [`EligibilityInput`] record supplied by the input
//! collector, along with the job category, pay type, and self-reported exempt
//! status enums it is built from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The broad job category a worker reports.
///
/// Categories map to an exemption weight in the ruleset. Strings that do not
/// name a known category deserialize to [`JobCategory::Other`].
///
/// # Example
///
/// ```
/// use overtime_eligibility::models::JobCategory;
///
/// let category: JobCategory = serde_json::from_str("\"outside-sales\"").unwrap();
/// assert_eq!(category, JobCategory::OutsideSales);
///
/// let unknown: JobCategory = serde_json::from_str("\"astronaut\"").unwrap();
/// assert_eq!(unknown, JobCategory::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum JobCategory {
    /// Executive or managerial roles.
    Executive,
    /// Office and administrative roles.
    Administrative,
    /// Learned or creative professional roles.
    Professional,
    /// Computer and IT roles.
    Computer,
    /// Outside sales roles.
    OutsideSales,
    /// Retail roles.
    Retail,
    /// Manufacturing and production roles.
    Manufacturing,
    /// Food service and hospitality roles.
    FoodService,
    /// Healthcare roles that are typically non-exempt (aides, technicians).
    HealthcareNonexempt,
    /// Construction and trades roles.
    Construction,
    /// Any other role.
    Other,
}

impl JobCategory {
    /// Every recognised category, in display order.
    pub const ALL: [JobCategory; 11] = [
        JobCategory::Executive,
        JobCategory::Administrative,
        JobCategory::Professional,
        JobCategory::Computer,
        JobCategory::OutsideSales,
        JobCategory::Retail,
        JobCategory::Manufacturing,
        JobCategory::FoodService,
        JobCategory::HealthcareNonexempt,
        JobCategory::Construction,
        JobCategory::Other,
    ];

    /// Returns the kebab-case identifier used on the wire and in rulesets.
    pub fn slug(&self) -> &'static str {
        match self {
            JobCategory::Executive => "executive",
            JobCategory::Administrative => "administrative",
            JobCategory::Professional => "professional",
            JobCategory::Computer => "computer",
            JobCategory::OutsideSales => "outside-sales",
            JobCategory::Retail => "retail",
            JobCategory::Manufacturing => "manufacturing",
            JobCategory::FoodService => "food-service",
            JobCategory::HealthcareNonexempt => "healthcare-nonexempt",
            JobCategory::Construction => "construction",
            JobCategory::Other => "other",
        }
    }

    /// Looks up a category by its identifier, returning `None` if unrecognised.
    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.slug().eq_ignore_ascii_case(slug))
    }

    /// Returns a human-readable label for explanations.
    pub fn label(&self) -> &'static str {
        match self {
            JobCategory::Executive => "Executive / Manager",
            JobCategory::Administrative => "Administrative / Office",
            JobCategory::Professional => "Professional",
            JobCategory::Computer => "Computer / IT",
            JobCategory::OutsideSales => "Outside Sales",
            JobCategory::Retail => "Retail",
            JobCategory::Manufacturing => "Manufacturing",
            JobCategory::FoodService => "Food Service",
            JobCategory::HealthcareNonexempt => "Healthcare (Non-Exempt Roles)",
            JobCategory::Construction => "Construction",
            JobCategory::Other => "Other",
        }
    }
}

impl From<String> for JobCategory {
    fn from(value: String) -> Self {
        Self::from_slug(&value).unwrap_or(JobCategory::Other)
    }
}

/// How the worker is paid.
///
/// Unlike [`JobCategory`] and [`ExemptStatus`], unrecognised strings are a
/// deserialization error rather than a fallback. Both variants move the score
/// (hourly adds to it, salary brings in the threshold comparison), so there is
/// no neutral value to fall back to. The API reports the error as
/// `VALIDATION_ERROR` listing the accepted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayType {
    /// Paid by the hour.
    Hourly,
    /// Paid a fixed annual salary.
    Salary,
}

/// Whether the worker believes their employer classifies them as exempt.
///
/// Unrecognised strings deserialize to [`ExemptStatus::Unsure`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ExemptStatus {
    /// The worker is classified as exempt.
    Yes,
    /// The worker is classified as non-exempt.
    No,
    /// The worker does not know.
    #[default]
    Unsure,
}

impl From<String> for ExemptStatus {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "yes" => ExemptStatus::Yes,
            "no" => ExemptStatus::No,
            _ => ExemptStatus::Unsure,
        }
    }
}

/// A single eligibility evaluation request.
///
/// `pay_amount` is the annual salary for salaried workers. For hourly workers
/// it is carried through but does not take part in the salary comparison.
/// `jurisdiction` is a two-letter state code; unknown codes follow the
/// federal baseline.
///
/// # Example
///
/// ```
/// use overtime_eligibility::models::{EligibilityInput, ExemptStatus, JobCategory, PayType};
/// use rust_decimal::Decimal;
///
/// let input = EligibilityInput {
///     job_category: JobCategory::Retail,
///     pay_type: PayType::Hourly,
///     pay_amount: Decimal::new(800, 0),
///     weekly_hours: Decimal::new(45, 0),
///     jurisdiction: "TX".to_string(),
///     exempt_status: ExemptStatus::Unsure,
/// };
/// assert!(input.is_hourly());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityInput {
    /// The worker's job category.
    pub job_category: JobCategory,
    /// How the worker is paid.
    pub pay_type: PayType,
    /// Annual salary for salaried workers.
    pub pay_amount: Decimal,
    /// Typical hours worked per week.
    pub weekly_hours: Decimal,
    /// Jurisdiction code (e.g., "CA").
    pub jurisdiction: String,
    /// Self-reported exempt classification.
    #[serde(default)]
    pub exempt_status: ExemptStatus,
}

impl EligibilityInput {
    /// Returns true if the worker is paid hourly.
    pub fn is_hourly(&self) -> bool {
        self.pay_type == PayType::Hourly
    }

    /// Returns true if the worker is paid a salary.
    pub fn is_salaried(&self) -> bool {
        self.pay_type == PayType::Salary
    }
}
