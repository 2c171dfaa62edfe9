use thiserror::Error;

/// Rule failures produced while checking a forecast candidate.
///
/// Each variant corresponds to one named rule of the validation contract;
/// [`field`](Self::field) and [`rule`](Self::rule) give the stable
/// identifiers a client uses to attribute the failure to a form field.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("date is required and must be a string")]
    DateRequired,
    #[error("date must be a valid ISO 8601 date string (YYYY-MM-DD), got '{value}'")]
    DateNotCalendar { value: String },

    #[error("temperatureC is required and must be a number")]
    TemperatureRequired,
    #[error("temperatureC must be a whole number, got {value}")]
    TemperatureNotInteger { value: f64 },
    #[error("temperatureC must be between -100 and 100 degrees Celsius, got {value}")]
    TemperatureOutOfRange { value: f64 },

    #[error("summary must be a string")]
    SummaryNotText,
    #[error("summary must not exceed 100 characters, got {len}")]
    SummaryTooLong { len: usize },

    #[error("payload must be a JSON object")]
    PayloadNotObject,
}

impl ValidationError {
    /// Candidate field the failed rule applies to, `$` for the whole payload.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::DateRequired | Self::DateNotCalendar { .. } => "date",
            Self::TemperatureRequired
            | Self::TemperatureNotInteger { .. }
            | Self::TemperatureOutOfRange { .. } => "temperatureC",
            Self::SummaryNotText | Self::SummaryTooLong { .. } => "summary",
            Self::PayloadNotObject => "$",
        }
    }

    /// Stable name of the failed rule.
    pub const fn rule(&self) -> &'static str {
        match self {
            Self::DateRequired | Self::TemperatureRequired => "required",
            Self::DateNotCalendar { .. } => "valid-calendar-date",
            Self::TemperatureNotInteger { .. } => "integer",
            Self::TemperatureOutOfRange { .. } => "range",
            Self::SummaryNotText => "string",
            Self::SummaryTooLong { .. } => "max-length",
            Self::PayloadNotObject => "object",
        }
    }
}
