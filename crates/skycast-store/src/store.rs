use std::sync::Arc;

use tokio::sync::RwLock;

use skycast_core::{Forecast, ForecastReading};

use crate::seed;

/// Process-wide collection of accepted forecasts.
///
/// Cloning shares the same underlying collection; callers receive a handle
/// rather than reaching into ambient state. Append and list both take the
/// lock, so a list never observes a partially appended record, and records
/// stay in the order appends were accepted.
#[derive(Debug, Clone)]
pub struct ForecastStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Debug)]
struct StoreInner {
    records: Vec<Forecast>,
    seeded: bool,
}

impl StoreInner {
    fn ensure_seeded(&mut self) {
        if !self.seeded {
            self.seeded = true;
            self.records = seed::sample_forecasts(seed::SAMPLE_COUNT);
        }
    }
}

impl ForecastStore {
    /// Store that seeds itself with sample forecasts on first access.
    pub fn new() -> Self {
        Self::with_seeded_flag(false)
    }

    /// Store that starts and stays empty until something is appended.
    pub fn empty() -> Self {
        Self::with_seeded_flag(true)
    }

    fn with_seeded_flag(seeded: bool) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                records: Vec::new(),
                seeded,
            })),
        }
    }

    /// Append an already-validated forecast, preserving arrival order.
    pub async fn append(&self, forecast: Forecast) {
        let mut inner = self.inner.write().await;
        inner.ensure_seeded();
        inner.records.push(forecast);
    }

    /// Every stored forecast in insertion order, each with a freshly
    /// derived Fahrenheit value attached.
    pub async fn list(&self) -> Vec<ForecastReading> {
        // The one-time seed needs the write half even on the read path.
        let mut inner = self.inner.write().await;
        inner.ensure_seeded();
        inner.records.iter().map(Forecast::reading).collect()
    }
}

impl Default for ForecastStore {
    fn default() -> Self {
        Self::new()
    }
}
