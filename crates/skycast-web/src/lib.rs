//! HTTP boundary for the skycast forecast API.
//!
//! Two routes over one shared store:
//!
//! - `GET /forecasts`: every stored record, each with derived Fahrenheit
//! - `POST /forecasts`: validate a candidate; append on success, return
//!   the full structured violation list on failure
//!
//! The boundary upholds the core contract: every violation reaches the
//! client as a structured list (never one combined string), and a body
//! that cannot be decoded at all is a validation failure, not a 500.

pub mod config;
pub mod error;
pub mod routes;

pub use config::WebConfig;
pub use error::WebError;
pub use routes::{cors_layer, router};
