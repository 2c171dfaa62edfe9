use time::{Duration, OffsetDateTime};

use skycast_core::{Forecast, ForecastDate};

/// Number of sample forecasts produced on first store access.
pub const SAMPLE_COUNT: usize = 5;

pub(crate) const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

/// Synthesize `count` valid forecasts for the upcoming days.
///
/// Purely a convenience dataset: a day offset per record, a random
/// temperature, a random label from the fixed vocabulary.
pub(crate) fn sample_forecasts(count: usize) -> Vec<Forecast> {
    let today = OffsetDateTime::now_utc().date();

    (1..=count as i64)
        .map(|offset| {
            let date = ForecastDate::from_date(today + Duration::days(offset));
            let temperature_c = fastrand::i32(-20..55);
            let summary = SUMMARIES[fastrand::usize(..SUMMARIES.len())];

            Forecast::new(date, temperature_c, Some(summary.to_owned()))
                .expect("sample values sit inside the validation bounds")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_the_requested_number_of_records() {
        assert_eq!(sample_forecasts(SAMPLE_COUNT).len(), SAMPLE_COUNT);
    }

    #[test]
    fn every_sample_is_in_bounds_with_a_known_label() {
        for forecast in sample_forecasts(50) {
            assert!((-20..55).contains(&forecast.temperature_c));
            let summary = forecast.summary.as_deref().expect("samples carry a label");
            assert!(SUMMARIES.contains(&summary));
        }
    }
}
