use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::error::FetchError;
use crate::rates::{RateProvider, RateSet};

/// Rate provider backed by a currencyapi-style endpoint.
///
/// One GET per fetch, parameterized by an API key and the base currency.
/// The response body is `{"data": {"EUR": {"value": 0.85}, ...}}`; anything
/// else is a fetch failure.
pub struct CurrencyApiProvider {
    base_url: String,
    api_key: String,
}

impl CurrencyApiProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        CurrencyApiProvider {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct LatestRatesResponse {
    data: HashMap<String, RateEntry>,
}

#[derive(Deserialize, Debug)]
struct RateEntry {
    value: f64,
}

#[async_trait]
impl RateProvider for CurrencyApiProvider {
    #[instrument(
        name = "RateFetch",
        skip(self),
        fields(base = %base)
    )]
    async fn fetch_rates(&self, base: &str) -> Result<RateSet, FetchError> {
        debug!("Requesting rates from {}", self.base_url);

        let client = reqwest::Client::builder().user_agent("fxc/0.1").build()?;
        let response = client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("base_currency", base)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
            });
        }

        let text = response.text().await?;
        let data: LatestRatesResponse = serde_json::from_str(&text)
            .map_err(|e| FetchError::Payload(format!("for base {base}: {e}")))?;

        Ok(RateSet::from_values(
            data.data.into_iter().map(|(code, entry)| (code, entry.value)),
        ))
    }
}
