//! Request types for the eligibility API.
//!
//! This module defines the JSON request structure for the `/evaluate`
//! endpoint and the input checks the engine itself does not perform.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{EligibilityInput, ExemptStatus, JobCategory, PayType};

/// Most hours that fit in a week.
pub const MAX_WEEKLY_HOURS: Decimal = Decimal::from_parts(168, 0, 0, false, 0);

/// Request body for the `/evaluate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// The worker's job category.
    pub job_category: JobCategory,
    /// How the worker is paid.
    pub pay_type: PayType,
    /// Annual salary for salaried workers.
    pub pay_amount: Decimal,
    /// Typical hours worked per week.
    #[serde(default = "default_weekly_hours")]
    pub weekly_hours: Decimal,
    /// Two-letter state code; empty means federal rules only.
    #[serde(default)]
    pub jurisdiction: String,
    /// Self-reported exempt classification.
    #[serde(default)]
    pub exempt_status: ExemptStatus,
}

fn default_weekly_hours() -> Decimal {
    Decimal::new(40, 0)
}

impl EvaluationRequest {
    /// Checks that numeric fields are within sane bounds.
    pub fn validate(&self) -> EngineResult<()> {
        if self.pay_amount < Decimal::ZERO {
            return Err(invalid("pay_amount", "cannot be negative"));
        }
        if self.weekly_hours < Decimal::ZERO {
            return Err(invalid("weekly_hours", "cannot be negative"));
        }
        if self.weekly_hours > MAX_WEEKLY_HOURS {
            return Err(invalid("weekly_hours", "cannot exceed 168"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidInput {
        field: field.to_string(),
        message: message.to_string(),
    }
}

impl From<EvaluationRequest> for EligibilityInput {
    fn from(req: EvaluationRequest) -> Self {
        EligibilityInput {
            job_category: req.job_category,
            pay_type: req.pay_type,
            pay_amount: req.pay_amount,
            weekly_hours: req.weekly_hours,
            jurisdiction: req.jurisdiction,
            exempt_status: req.exempt_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> EvaluationRequest {
        EvaluationRequest {
            job_category: JobCategory::Administrative,
            pay_type: PayType::Salary,
            pay_amount: Decimal::new(50000, 0),
            weekly_hours: Decimal::new(45, 0),
            jurisdiction: "TX".to_string(),
            exempt_status: ExemptStatus::Unsure,
        }
    }

    #[test]
    fn test_deserialize_full_request() {
        let json = r#"{
            "job_category": "computer",
            "pay_type": "salary",
            "pay_amount": "95000",
            "weekly_hours": "50",
            "jurisdiction": "WA",
            "exempt_status": "yes"
        }"#;

        let request: EvaluationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.job_category, JobCategory::Computer);
        assert_eq!(request.pay_type, PayType::Salary);
        assert_eq!(request.weekly_hours, Decimal::new(50, 0));
        assert_eq!(request.exempt_status, ExemptStatus::Yes);
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let json = r#"{
            "job_category": "retail",
            "pay_type": "hourly",
            "pay_amount": 800
        }"#;

        let request: EvaluationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.weekly_hours, Decimal::new(40, 0));
        assert_eq!(request.jurisdiction, "");
        assert_eq!(request.exempt_status, ExemptStatus::Unsure);
    }

    #[test]
    fn test_missing_pay_type_is_rejected() {
        let json = r#"{ "job_category": "retail", "pay_amount": 800 }"#;
        let err = serde_json::from_str::<EvaluationRequest>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `pay_type`"));
    }

    #[test]
    fn test_validate_accepts_valid_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_pay() {
        let mut request = valid_request();
        request.pay_amount = Decimal::new(-1, 0);

        match request.validate() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "pay_amount"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_hours_outside_week() {
        let mut request = valid_request();
        request.weekly_hours = Decimal::new(169, 0);
        assert!(request.validate().is_err());

        request.weekly_hours = Decimal::new(-1, 0);
        assert!(request.validate().is_err());

        request.weekly_hours = MAX_WEEKLY_HOURS;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_conversion_to_input() {
        let input: EligibilityInput = valid_request().into();
        assert_eq!(input.job_category, JobCategory::Administrative);
        assert_eq!(input.jurisdiction, "TX");
        assert_eq!(input.pay_amount, Decimal::new(50000, 0));
    }
}
