//! # Skycast Core
//!
//! Shared contract for the skycast forecast API.
//!
//! ## Overview
//!
//! This crate is the single definition of what a valid forecast is. Both
//! sides of the HTTP boundary depend on it: the server checks submissions
//! with it, and the client runs the same check before a request leaves the
//! process. There is exactly one rule set, never two drifting copies.
//!
//! - **Canonical domain types** for forecast records and calendar dates
//! - **Validation engine** that turns an untyped candidate into either a
//!   record or a complete list of field-level violations
//! - **Derivation** of the read-only Fahrenheit value, recomputed on every
//!   read and never stored
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Domain models (`Forecast`, `ForecastDate`, `ForecastReading`) |
//! | [`error`] | Validation error types |
//! | [`validate`] | Total candidate validation and violation reporting |
//!
//! ## Error Handling
//!
//! Validation never panics and never treats malformed input as a fault.
//! A candidate that cannot be interpreted at all is itself a validation
//! failure, reported as a single whole-payload violation:
//!
//! ```rust
//! use skycast_core::{validate_candidate, Validated};
//!
//! let outcome = validate_candidate(&serde_json::json!("not an object"));
//! match outcome {
//!     Validated::Valid(_) => unreachable!(),
//!     Validated::Invalid(violations) => {
//!         assert_eq!(violations.len(), 1);
//!         assert_eq!(violations[0].field, "$");
//!     }
//! }
//! ```

pub mod domain;
pub mod error;
pub mod validate;

// Re-export commonly used types at crate root for convenience

pub use domain::{
    derive_fahrenheit, Forecast, ForecastDate, ForecastReading, MAX_SUMMARY_CHARS,
    MAX_TEMPERATURE_C, MIN_TEMPERATURE_C,
};
pub use error::ValidationError;
pub use validate::{validate_candidate, Validated, Violation};
