//! Conversion engine: turns an amount and a currency pair into a converted
//! value, a popular-currency quick table and a synthetic trend series.

use tracing::debug;

use crate::error::ConvertError;
use crate::history::ConversionHistory;
use crate::rates::{RateProvider, RateSet};
use crate::trend::{self, TrendSeries};

/// Result of a single conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub base: String,
    pub target: String,
    pub amount: f64,
    pub rate: f64,
    /// Full-precision converted amount; round only at the display boundary.
    pub converted: f64,
    /// Rate set the conversion was computed from. The quick table is
    /// rendered from this same fetch rather than a second round-trip.
    pub rates: RateSet,
}

impl Conversion {
    pub fn converted_display(&self) -> f64 {
        round2(self.converted)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} {} = {:.2} {}",
            self.amount, self.base, self.converted, self.target
        )
    }
}

/// Drives conversions against a [`RateProvider`] and owns the bounded
/// history of past conversions.
pub struct ConversionEngine<'a> {
    provider: &'a dyn RateProvider,
    history: ConversionHistory,
}

impl<'a> ConversionEngine<'a> {
    pub fn new(provider: &'a dyn RateProvider) -> Self {
        ConversionEngine {
            provider,
            history: ConversionHistory::new(),
        }
    }

    /// Converts `amount` from `base` to `target`.
    ///
    /// The amount is taken as entered by the user; anything that does not
    /// parse as a finite number fails before any network round-trip. Fetch
    /// problems and unknown target currencies propagate as errors, never as
    /// a degraded result. On success the conversion summary is appended to
    /// the history log.
    pub async fn convert(
        &mut self,
        base: &str,
        target: &str,
        amount: &str,
    ) -> Result<Conversion, ConvertError> {
        let amount: f64 = amount
            .trim()
            .parse()
            .ok()
            .filter(|a: &f64| a.is_finite())
            .ok_or_else(|| ConvertError::InvalidAmount {
                input: amount.to_string(),
            })?;

        let rates = self.provider.fetch_rates(base).await?;
        let rate = rates.get(target).ok_or_else(|| ConvertError::UnknownCurrency {
            code: target.to_string(),
            base: base.to_string(),
        })?;

        let conversion = Conversion {
            base: base.to_string(),
            target: target.to_string(),
            amount,
            rate,
            converted: amount * rate,
            rates,
        };
        debug!(summary = %conversion.summary(), "Converted");

        self.history.push(conversion.summary());
        Ok(conversion)
    }

    /// Builds the synthetic trend for a currency pair.
    ///
    /// Always yields exactly `days` points: when the fetch fails or the
    /// target is missing, the series degrades to a flat 1.0 value per day
    /// instead of erroring, since the chart is illustrative.
    pub async fn build_trend(&self, base: &str, target: &str, days: usize) -> TrendSeries {
        let labels = trend::date_labels(days);
        let values = match self.provider.fetch_rates(base).await {
            Ok(rates) => match rates.get(target) {
                Some(rate) => trend::synthetic_values(rate, days),
                None => {
                    debug!(code = target, "Target missing from rates, using flat trend");
                    trend::flat_values(days)
                }
            },
            Err(e) => {
                debug!(error = %e, "Rate fetch failed, using flat trend");
                trend::flat_values(days)
            }
        };
        trend::series_from(labels, values)
    }

    pub fn history(&self) -> &ConversionHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// Converts `amount` into each of `codes` using `rates`, rounded to 2
/// decimals. Codes absent from the rate set are skipped.
pub fn quick_table(amount: f64, rates: &RateSet, codes: &[&str]) -> Vec<(String, f64)> {
    codes
        .iter()
        .filter_map(|code| {
            rates
                .get(code)
                .map(|rate| (code.to_string(), round2(amount * rate)))
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
