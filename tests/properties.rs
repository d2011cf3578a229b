//! Property-based tests for the eligibility engine.
//!
//! These check the engine's invariants over generated inputs rather than
//! hand-picked scenarios.

use proptest::prelude::*;
use rust_decimal::Decimal;

use overtime_eligibility::calculation::evaluate;
use overtime_eligibility::config::{FEDERAL_SALARY_THRESHOLD, builtin_ruleset};
use overtime_eligibility::models::{
    EligibilityInput, EligibilityResult, ExemptStatus, FactorStatus, JobCategory, PayType,
};

const KNOWN_JURISDICTIONS: [&str; 6] = ["CA", "NY", "WA", "CO", "AK", "NV"];

fn job_category() -> impl Strategy<Value = JobCategory> {
    proptest::sample::select(JobCategory::ALL.to_vec())
}

fn pay_type() -> impl Strategy<Value = PayType> {
    prop_oneof![Just(PayType::Hourly), Just(PayType::Salary)]
}

fn exempt_status() -> impl Strategy<Value = ExemptStatus> {
    prop_oneof![
        Just(ExemptStatus::Yes),
        Just(ExemptStatus::No),
        Just(ExemptStatus::Unsure)
    ]
}

/// Annual pay in cents, up to $500,000.
fn pay_amount() -> impl Strategy<Value = Decimal> {
    (0i64..=50_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Weekly hours in tenths, 0 to 168.
fn weekly_hours() -> impl Strategy<Value = Decimal> {
    (0i64..=1680).prop_map(|tenths| Decimal::new(tenths, 1))
}

/// Any decimal, including the extremes, at any scale.
fn extreme_decimal() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::MIN),
        Just(Decimal::MAX),
        (any::<i64>(), 0u32..=28).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale)),
    ]
}

fn jurisdiction() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(KNOWN_JURISDICTIONS.to_vec()).prop_map(str::to_string),
        "[A-Z]{2}",
        Just(String::new()),
    ]
}

prop_compose! {
    fn eligibility_input()(
        job_category in job_category(),
        pay_type in pay_type(),
        pay_amount in pay_amount(),
        weekly_hours in weekly_hours(),
        jurisdiction in jurisdiction(),
        exempt_status in exempt_status(),
    ) -> EligibilityInput {
        EligibilityInput {
            job_category,
            pay_type,
            pay_amount,
            weekly_hours,
            jurisdiction,
            exempt_status,
        }
    }
}

proptest! {
    #[test]
    fn effective_threshold_is_max_of_federal_and_state(input in eligibility_input()) {
        let output = evaluate(&input);
        let thresholds = &output.thresholds;

        match builtin_ruleset().jurisdiction(&input.jurisdiction) {
            Some(rule) => {
                prop_assert!(thresholds.state_has_special_rules);
                prop_assert_eq!(thresholds.state_threshold, Some(rule.threshold));
                prop_assert_eq!(
                    thresholds.effective_threshold,
                    FEDERAL_SALARY_THRESHOLD.max(rule.threshold)
                );
            }
            None => {
                prop_assert!(!thresholds.state_has_special_rules);
                prop_assert_eq!(thresholds.state_threshold, None);
                prop_assert_eq!(thresholds.effective_threshold, FEDERAL_SALARY_THRESHOLD);
            }
        }
        prop_assert!(thresholds.effective_threshold >= FEDERAL_SALARY_THRESHOLD);
    }

    #[test]
    fn hourly_never_lowers_eligibility(input in eligibility_input()) {
        let salaried = EligibilityInput { pay_type: PayType::Salary, ..input.clone() };
        let hourly = EligibilityInput { pay_type: PayType::Hourly, ..input };

        let salaried_output = evaluate(&salaried);
        let hourly_output = evaluate(&hourly);

        prop_assert!(
            hourly_output.result.eligibility_rank() >= salaried_output.result.eligibility_rank()
        );
        prop_assert!(hourly_output.score >= salaried_output.score);
        prop_assert_ne!(hourly_output.result, EligibilityResult::LikelyExempt);
        prop_assert_eq!(
            hourly_output.factor("Pay Type").map(|f| f.status),
            Some(FactorStatus::Favorable)
        );
    }

    #[test]
    fn weekly_hours_do_not_change_classification(
        input in eligibility_input(),
        other_hours in weekly_hours(),
    ) {
        let first = evaluate(&input);
        let second = evaluate(&EligibilityInput { weekly_hours: other_hours, ..input });

        prop_assert_eq!(first.result, second.result);
        prop_assert_eq!(first.score, second.score);
    }

    #[test]
    fn hours_over_threshold_is_never_negative(input in eligibility_input()) {
        let output = evaluate(&input);
        let expected = (input.weekly_hours - Decimal::new(40, 0)).max(Decimal::ZERO);

        prop_assert_eq!(output.thresholds.hours_over_threshold, expected);
    }

    #[test]
    fn hourly_scores_above_salary_meeting_threshold(
        input in eligibility_input(),
        excess in 0i64..=10_000_000,
    ) {
        let effective = evaluate(&input).thresholds.effective_threshold;
        let salaried = EligibilityInput {
            pay_type: PayType::Salary,
            pay_amount: effective + Decimal::new(excess, 2),
            ..input
        };
        let hourly = EligibilityInput { pay_type: PayType::Hourly, ..salaried.clone() };

        prop_assert!(evaluate(&hourly).score > evaluate(&salaried).score);
    }

    #[test]
    fn extreme_values_still_evaluate(
        input in eligibility_input(),
        pay_amount in extreme_decimal(),
        weekly_hours in extreme_decimal(),
    ) {
        let output = evaluate(&EligibilityInput { pay_amount, weekly_hours, ..input });

        prop_assert!(matches!(
            output.result,
            EligibilityResult::LikelyEligible
                | EligibilityResult::PossiblyEligible
                | EligibilityResult::LikelyExempt
        ));
        prop_assert_eq!(output.factors.len(), 6);
        prop_assert!(output.thresholds.hours_over_threshold >= Decimal::ZERO);
    }

    #[test]
    fn evaluation_is_idempotent(input in eligibility_input()) {
        let first = serde_json::to_vec(&evaluate(&input)).unwrap();
        let second = serde_json::to_vec(&evaluate(&input)).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn output_text_matches_result(input in eligibility_input()) {
        let output = evaluate(&input);

        prop_assert_eq!(output.result_label.as_str(), output.result.label());
        prop_assert_eq!(output.summary.as_str(), output.result.summary());
        prop_assert_eq!(output.factors.len(), 6);
    }

    #[test]
    fn reported_exempt_above_threshold_is_likely_exempt(
        input in eligibility_input(),
        excess in 0i64..=10_000_000,
    ) {
        let effective = evaluate(&input).thresholds.effective_threshold;
        let exempt = EligibilityInput {
            pay_type: PayType::Salary,
            exempt_status: ExemptStatus::Yes,
            pay_amount: effective + Decimal::new(excess, 2),
            ..input
        };

        prop_assert_eq!(evaluate(&exempt).result, EligibilityResult::LikelyExempt);
    }
}
