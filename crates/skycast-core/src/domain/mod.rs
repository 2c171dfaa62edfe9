//! Canonical forecast domain types.
//!
//! Construction validates all invariants: a [`Forecast`] that exists
//! satisfies every rule of the contract, so the store can hold it without
//! re-checking anything. The Fahrenheit value is never part of the stored
//! form; it appears only on [`ForecastReading`], derived at read time.

mod date;
mod forecast;

pub use date::ForecastDate;
pub use forecast::{
    derive_fahrenheit, summary_fits, temperature_in_range, Forecast, ForecastReading,
    MAX_SUMMARY_CHARS, MAX_TEMPERATURE_C, MIN_TEMPERATURE_C,
};
