//! Client-side half of the forecast contract.
//!
//! [`ForecastClient`] talks to the skycast API and runs the same
//! validation engine the server runs, as a pre-check, before a request
//! ever leaves the process. Both sides of the boundary therefore evaluate
//! the one shared rule set from `skycast-core`.

mod client;
mod error;

pub use client::ForecastClient;
pub use error::ClientError;
