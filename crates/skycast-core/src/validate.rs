//! Total validation of untyped forecast candidates.
//!
//! The engine checks every field of a candidate against the shared rule
//! set and collects every failure, so a client sees all problems in one
//! round trip. It is a pure function of its input and never panics:
//! malformed input is a validation failure, not a fault.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{summary_fits, temperature_in_range, MAX_TEMPERATURE_C, MIN_TEMPERATURE_C};
use crate::{Forecast, ForecastDate, ValidationError};

/// One field-level rule failure, as surfaced across the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub rule: String,
    pub message: String,
}

impl From<ValidationError> for Violation {
    fn from(error: ValidationError) -> Self {
        Self {
            field: error.field().to_owned(),
            rule: error.rule().to_owned(),
            message: error.to_string(),
        }
    }
}

/// Outcome of checking a candidate against the shared rule set.
#[derive(Debug, Clone, PartialEq)]
pub enum Validated {
    Valid(Forecast),
    Invalid(Vec<Violation>),
}

impl Validated {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn into_violations(self) -> Vec<Violation> {
        match self {
            Self::Valid(_) => Vec::new(),
            Self::Invalid(violations) => violations,
        }
    }
}

/// Check a candidate against every field rule and collect every failure.
///
/// Fields are evaluated in declaration order (date, temperatureC, summary);
/// a failing field reports its first failing rule, and no field stops the
/// others from being checked. Unknown fields are ignored. A candidate that
/// is not a JSON object yields a single whole-payload violation.
pub fn validate_candidate(candidate: &Value) -> Validated {
    let Some(fields) = candidate.as_object() else {
        return Validated::Invalid(vec![ValidationError::PayloadNotObject.into()]);
    };

    let mut violations: Vec<Violation> = Vec::new();

    let date = check_date(fields)
        .map_err(|error| violations.push(error.into()))
        .ok();
    let temperature_c = check_temperature(fields)
        .map_err(|error| violations.push(error.into()))
        .ok();
    let summary = check_summary(fields)
        .map_err(|error| violations.push(error.into()))
        .ok();

    match (date, temperature_c, summary) {
        (Some(date), Some(temperature_c), Some(summary)) => {
            match Forecast::new(date, temperature_c, summary) {
                Ok(forecast) => Validated::Valid(forecast),
                Err(error) => Validated::Invalid(vec![error.into()]),
            }
        }
        _ => Validated::Invalid(violations),
    }
}

fn check_date(fields: &Map<String, Value>) -> Result<ForecastDate, ValidationError> {
    match fields.get("date") {
        Some(Value::String(text)) if !text.is_empty() => ForecastDate::parse(text),
        _ => Err(ValidationError::DateRequired),
    }
}

fn check_temperature(fields: &Map<String, Value>) -> Result<i32, ValidationError> {
    let Some(Value::Number(number)) = fields.get("temperatureC") else {
        return Err(ValidationError::TemperatureRequired);
    };

    if let Some(value) = number.as_i64() {
        return temperature_in_range(value);
    }

    match number.as_f64() {
        Some(value) if value.fract() != 0.0 => {
            Err(ValidationError::TemperatureNotInteger { value })
        }
        // Integral floats (20.0) count as integers and get the range check.
        Some(value) => {
            if value < f64::from(MIN_TEMPERATURE_C) || value > f64::from(MAX_TEMPERATURE_C) {
                Err(ValidationError::TemperatureOutOfRange { value })
            } else {
                Ok(value as i32)
            }
        }
        None => Err(ValidationError::TemperatureRequired),
    }
}

fn check_summary(fields: &Map<String, Value>) -> Result<Option<String>, ValidationError> {
    match fields.get("summary") {
        // Null and absent are equivalent on input, normalized to absent.
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => {
            summary_fits(text)?;
            Ok(Some(text.clone()))
        }
        Some(_) => Err(ValidationError::SummaryNotText),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn violations(candidate: Value) -> Vec<Violation> {
        validate_candidate(&candidate).into_violations()
    }

    #[test]
    fn accepts_a_fully_valid_candidate() {
        let outcome = validate_candidate(&json!({
            "date": "2024-06-01",
            "temperatureC": 21,
            "summary": "Mild",
        }));

        let Validated::Valid(forecast) = outcome else {
            panic!("candidate must validate");
        };
        assert_eq!(forecast.date.format_iso(), "2024-06-01");
        assert_eq!(forecast.temperature_c, 21);
        assert_eq!(forecast.summary.as_deref(), Some("Mild"));
    }

    #[test]
    fn summary_may_be_absent_or_null() {
        let absent = validate_candidate(&json!({"date": "2024-06-01", "temperatureC": 0}));
        assert!(absent.is_valid());

        let null = validate_candidate(&json!({
            "date": "2024-06-01",
            "temperatureC": 0,
            "summary": null,
        }));
        let Validated::Valid(forecast) = null else {
            panic!("null summary must validate");
        };
        assert_eq!(forecast.summary, None);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let outcome = validate_candidate(&json!({
            "date": "2024-06-01",
            "temperatureC": 21,
            "humidity": 80,
            "station": "KNYC",
        }));
        assert!(outcome.is_valid());
    }

    #[test]
    fn each_single_failure_names_its_field() {
        let cases = [
            (json!({"temperatureC": 21}), "date", "required"),
            (json!({"date": "", "temperatureC": 21}), "date", "required"),
            (json!({"date": 20240601, "temperatureC": 21}), "date", "required"),
            (
                json!({"date": "not-a-date", "temperatureC": 21}),
                "date",
                "valid-calendar-date",
            ),
            (
                json!({"date": "2024-02-30", "temperatureC": 21}),
                "date",
                "valid-calendar-date",
            ),
            (json!({"date": "2024-06-01"}), "temperatureC", "required"),
            (
                json!({"date": "2024-06-01", "temperatureC": "21"}),
                "temperatureC",
                "required",
            ),
            (
                json!({"date": "2024-06-01", "temperatureC": 20.5}),
                "temperatureC",
                "integer",
            ),
            (
                json!({"date": "2024-06-01", "temperatureC": 101}),
                "temperatureC",
                "range",
            ),
            (
                json!({"date": "2024-06-01", "temperatureC": 21, "summary": 7}),
                "summary",
                "string",
            ),
            (
                json!({"date": "2024-06-01", "temperatureC": 21, "summary": "x".repeat(101)}),
                "summary",
                "max-length",
            ),
        ];

        for (candidate, field, rule) in cases {
            let found = violations(candidate.clone());
            assert_eq!(found.len(), 1, "candidate {candidate} must fail once");
            assert_eq!(found[0].field, field);
            assert_eq!(found[0].rule, rule);
        }
    }

    #[test]
    fn collects_every_violation_in_field_order() {
        let found = violations(json!({
            "date": "not-a-date",
            "temperatureC": 500,
            "summary": "x".repeat(200),
        }));

        assert_eq!(found.len(), 3);
        assert_eq!(found[0].field, "date");
        assert_eq!(found[1].field, "temperatureC");
        assert_eq!(found[2].field, "summary");
    }

    #[test]
    fn non_object_payload_is_one_whole_payload_violation() {
        for candidate in [json!(null), json!(42), json!("text"), json!([1, 2, 3])] {
            let found = violations(candidate);
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].field, "$");
            assert_eq!(found[0].rule, "object");
        }
    }

    #[test]
    fn range_boundaries_are_inclusive() {
        for temperature in [-100, 100] {
            let outcome = validate_candidate(&json!({
                "date": "2024-06-01",
                "temperatureC": temperature,
            }));
            assert!(outcome.is_valid(), "{temperature} must validate");
        }
    }

    #[test]
    fn integral_float_counts_as_an_integer() {
        let outcome = validate_candidate(&json!({
            "date": "2024-06-01",
            "temperatureC": 20.0,
        }));
        assert!(outcome.is_valid());
    }

    #[test]
    fn empty_summary_survives_validation_as_present() {
        let outcome = validate_candidate(&json!({
            "date": "2024-06-01",
            "temperatureC": 0,
            "summary": "",
        }));
        let Validated::Valid(forecast) = outcome else {
            panic!("empty summary must validate");
        };
        assert_eq!(forecast.summary.as_deref(), Some(""));
    }
}
