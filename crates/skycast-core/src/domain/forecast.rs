use serde::{Deserialize, Serialize};

use crate::{ForecastDate, ValidationError};

pub const MIN_TEMPERATURE_C: i32 = -100;
pub const MAX_TEMPERATURE_C: i32 = 100;
pub const MAX_SUMMARY_CHARS: usize = 100;

/// Derive the read-only Fahrenheit value from a Celsius temperature.
///
/// `32 + trunc(c / 0.5556)`, with the cast truncating toward zero. The
/// formula is carried over verbatim from the system of record: for negative
/// inputs truncation differs from floor, and historical conversions depend
/// on exactly this behavior.
pub fn derive_fahrenheit(celsius: i32) -> i32 {
    32 + (f64::from(celsius) / 0.5556) as i32
}

/// Check a temperature against the inclusive `[-100, 100]` range.
pub fn temperature_in_range(value: i64) -> Result<i32, ValidationError> {
    if value < i64::from(MIN_TEMPERATURE_C) || value > i64::from(MAX_TEMPERATURE_C) {
        return Err(ValidationError::TemperatureOutOfRange {
            value: value as f64,
        });
    }
    Ok(value as i32)
}

/// Check a summary against the length cap, counted in characters.
pub fn summary_fits(summary: &str) -> Result<(), ValidationError> {
    let len = summary.chars().count();
    if len > MAX_SUMMARY_CHARS {
        return Err(ValidationError::SummaryTooLong { len });
    }
    Ok(())
}

/// Canonical forecast record.
///
/// Built only through [`Forecast::new`], never mutated afterwards. The
/// stored form has no Fahrenheit field; [`reading`](Self::reading) derives
/// it on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    pub date: ForecastDate,
    pub temperature_c: i32,
    pub summary: Option<String>,
}

impl Forecast {
    pub fn new(
        date: ForecastDate,
        temperature_c: i32,
        summary: Option<String>,
    ) -> Result<Self, ValidationError> {
        let temperature_c = temperature_in_range(i64::from(temperature_c))?;
        if let Some(text) = summary.as_deref() {
            summary_fits(text)?;
        }

        Ok(Self {
            date,
            temperature_c,
            summary,
        })
    }

    /// Fahrenheit view of the stored Celsius value, derived on every call.
    pub fn temperature_f(&self) -> i32 {
        derive_fahrenheit(self.temperature_c)
    }

    /// Wire form with the derived field attached.
    pub fn reading(&self) -> ForecastReading {
        ForecastReading {
            date: self.date,
            temperature_c: self.temperature_c,
            temperature_f: self.temperature_f(),
            summary: self.summary.clone(),
        }
    }
}

/// Forecast as served to callers: every stored field plus the derived
/// Fahrenheit value.
///
/// An absent summary is omitted from the JSON entirely, so it stays
/// distinguishable from an empty-string summary end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReading {
    pub date: ForecastDate,
    pub temperature_c: i32,
    pub temperature_f: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}
