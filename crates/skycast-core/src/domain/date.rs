use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::{Date, Month};

use crate::ValidationError;

/// Calendar date restricted to the strict `YYYY-MM-DD` wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ForecastDate(Date);

impl ForecastDate {
    /// Parse a strict `YYYY-MM-DD` string into a real Gregorian date.
    ///
    /// Loose lexical forms (`24-1-1`) and well-formed but impossible dates
    /// (`2024-02-30`) are both rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let not_calendar = || ValidationError::DateNotCalendar {
            value: input.to_owned(),
        };

        let bytes = input.as_bytes();
        let shaped = bytes.len() == 10
            && bytes.iter().enumerate().all(|(index, byte)| {
                if index == 4 || index == 7 {
                    *byte == b'-'
                } else {
                    byte.is_ascii_digit()
                }
            });
        if !shaped {
            return Err(not_calendar());
        }

        let year: i32 = input[..4].parse().map_err(|_| not_calendar())?;
        let month: u8 = input[5..7].parse().map_err(|_| not_calendar())?;
        let day: u8 = input[8..10].parse().map_err(|_| not_calendar())?;

        let month = Month::try_from(month).map_err(|_| not_calendar())?;
        let date = Date::from_calendar_date(year, month, day).map_err(|_| not_calendar())?;
        Ok(Self(date))
    }

    pub fn from_date(date: Date) -> Self {
        Self(date)
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_iso(self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl Display for ForecastDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for ForecastDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for ForecastDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
