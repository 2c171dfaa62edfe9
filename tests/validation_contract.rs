//! Behavior-driven tests for the shared validation contract.
//!
//! These tests verify WHAT a submitter observes: which candidates pass,
//! and that every failing candidate gets back a complete, field-attributed
//! list of violations in one round trip.

use serde_json::json;

use skycast_core::{validate_candidate, Validated};
use skycast_tests::{three_way_invalid_candidate, valid_candidate};

// =============================================================================
// Acceptance
// =============================================================================

#[test]
fn when_every_rule_is_satisfied_the_candidate_validates() {
    // Given: a candidate with a real date, in-range integer temperature,
    // and a short summary
    let outcome = validate_candidate(&valid_candidate());

    // Then: it validates, normalized into a canonical record
    let Validated::Valid(forecast) = outcome else {
        panic!("candidate must validate");
    };
    assert_eq!(forecast.date.format_iso(), "2024-06-01");
    assert_eq!(forecast.temperature_c, 21);
    assert_eq!(forecast.summary.as_deref(), Some("Mild"));
}

#[test]
fn boundary_values_are_inside_the_contract() {
    for candidate in [
        json!({"date": "2024-01-01", "temperatureC": 100, "summary": "a".repeat(100)}),
        json!({"date": "2024-01-01", "temperatureC": -100}),
        json!({"date": "2024-02-29", "temperatureC": 0}),
    ] {
        assert!(
            validate_candidate(&candidate).is_valid(),
            "candidate {candidate} must validate"
        );
    }
}

// =============================================================================
// Rejection: completeness and attribution
// =============================================================================

#[test]
fn when_three_fields_are_bad_all_three_violations_come_back() {
    // When: date, temperature, and summary are each broken
    let violations = validate_candidate(&three_way_invalid_candidate()).into_violations();

    // Then: no short-circuiting; one violation per field, in field order
    assert_eq!(violations.len(), 3);
    assert_eq!(
        violations.iter().map(|v| v.field.as_str()).collect::<Vec<_>>(),
        vec!["date", "temperatureC", "summary"]
    );
}

#[test]
fn a_lexically_valid_but_impossible_date_is_rejected_on_the_date_field() {
    let violations =
        validate_candidate(&json!({"date": "2024-02-30", "temperatureC": 10})).into_violations();

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "date");
    assert_eq!(violations[0].rule, "valid-calendar-date");
}

#[test]
fn a_loose_date_format_is_rejected_even_when_plausible() {
    let violations =
        validate_candidate(&json!({"date": "24-1-1", "temperatureC": 10})).into_violations();

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, "valid-calendar-date");
}

#[test]
fn the_101st_summary_character_is_the_only_thing_that_fails() {
    let violations = validate_candidate(&json!({
        "date": "2024-01-01",
        "temperatureC": 100,
        "summary": "a".repeat(101),
    }))
    .into_violations();

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "summary");
    assert_eq!(violations[0].rule, "max-length");
}

#[test]
fn every_violation_carries_a_human_readable_message() {
    let violations = validate_candidate(&three_way_invalid_candidate()).into_violations();
    for violation in violations {
        assert!(!violation.message.is_empty());
        assert!(!violation.rule.is_empty());
    }
}

// =============================================================================
// Malformed input is a validation failure, not a fault
// =============================================================================

#[test]
fn a_non_object_payload_yields_one_whole_payload_violation() {
    for payload in [json!([1, 2, 3]), json!("weather"), json!(null), json!(3.5)] {
        let violations = validate_candidate(&payload).into_violations();
        assert_eq!(violations.len(), 1, "payload {payload} must fail once");
        assert_eq!(violations[0].field, "$");
        assert_eq!(violations[0].rule, "object");
    }
}

#[test]
fn validation_is_pure_and_repeatable() {
    let candidate = three_way_invalid_candidate();
    let first = validate_candidate(&candidate).into_violations();
    let second = validate_candidate(&candidate).into_violations();
    assert_eq!(first, second);
}
