//! Synthetic rate trend series.
//!
//! The remote source exposes no historical data, so the trend is fabricated
//! from the current rate: each day gets a fixed percentage offset around the
//! midpoint of the window. This is a deliberate approximation kept for
//! display purposes, not a measurement.

use chrono::{Duration, Local};

/// Days shown in the trend chart by default.
pub const DEFAULT_TREND_DAYS: usize = 7;

/// One point of a trend series.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    /// Day label, formatted as "07-Aug".
    pub label: String,
    pub value: f64,
}

/// Ordered trend points, oldest first.
pub type TrendSeries = Vec<TrendPoint>;

/// Labels for the most recent `days` calendar days ending today, oldest
/// first.
pub fn date_labels(days: usize) -> Vec<String> {
    let today = Local::now().date_naive();
    (0..days)
        .rev()
        .map(|i| (today - Duration::days(i as i64)).format("%d-%b").to_string())
        .collect()
}

/// Synthetic values anchored on `rate`: position `i` in the window gets
/// `rate * (1 + 0.01 * (i - days / 2))`, rounded to 4 decimals.
pub fn synthetic_values(rate: f64, days: usize) -> Vec<f64> {
    let mid = (days / 2) as f64;
    (0..days)
        .map(|i| round4(rate * (1.0 + 0.01 * (i as f64 - mid))))
        .collect()
}

/// Flat unity series used when no rate is available.
pub fn flat_values(days: usize) -> Vec<f64> {
    vec![1.0; days]
}

pub fn series_from(labels: Vec<String>, values: Vec<f64>) -> TrendSeries {
    labels
        .into_iter()
        .zip(values)
        .map(|(label, value)| TrendPoint { label, value })
        .collect()
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
