//! In-memory forecast store.
//!
//! Holds the ordered collection of accepted forecasts for the lifetime of
//! the process. The store trusts its callers: records only reach it after
//! passing the validation engine, and nothing is re-checked here. On first
//! access it seeds itself once with a handful of synthetic records so a
//! fresh process has a non-empty dataset.

mod seed;
mod store;

pub use seed::SAMPLE_COUNT;
pub use store::ForecastStore;
