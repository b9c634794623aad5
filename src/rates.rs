//! Rate set type and the provider abstraction.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::warn;

use crate::error::FetchError;

/// Base used when enumerating known currencies for selection lists.
pub const REFERENCE_BASE: &str = "USD";

/// Fallback shown when the currency list cannot be fetched.
pub const DEFAULT_CURRENCIES: [&str; 5] = ["USD", "EUR", "GBP", "PKR", "JPY"];

/// Exchange rates relative to one implicit base currency.
///
/// Codes are unique and values are always positive and finite; entries that
/// are not are dropped at construction. A rate set is built fresh on every
/// fetch and never cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateSet {
    rates: BTreeMap<String, f64>,
}

impl RateSet {
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let rates = values
            .into_iter()
            .filter(|(code, value)| {
                let ok = value.is_finite() && *value > 0.0;
                if !ok {
                    warn!(%code, value, "Dropping non-positive rate");
                }
                ok
            })
            .collect();
        RateSet { rates }
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    /// Currency codes in sorted order.
    pub fn codes(&self) -> Vec<String> {
        self.rates.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the rate set for `base` with a single network round-trip.
    ///
    /// `base` must be a non-empty currency code; whether it names a real
    /// currency is left to the remote source. No retry, no caching, no
    /// stale fallback: repeated calls with the same base re-fetch.
    async fn fetch_rates(&self, base: &str) -> Result<RateSet, FetchError>;

    /// Sorted list of currency codes known to the remote source.
    ///
    /// Falls back to [`DEFAULT_CURRENCIES`] when the fetch fails, since the
    /// list only populates selection widgets and an error dialog there
    /// would be worse than a short list.
    async fn list_currencies(&self) -> Vec<String> {
        match self.fetch_rates(REFERENCE_BASE).await {
            Ok(rates) => rates.codes(),
            Err(e) => {
                warn!(error = %e, "Falling back to default currency list");
                DEFAULT_CURRENCIES.iter().map(|c| c.to_string()).collect()
            }
        }
    }
}
