//! Error types for the conversion core.

use thiserror::Error;

/// Failure to obtain a rate set from the remote source.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error: {status} from rate endpoint")]
    Status { status: reqwest::StatusCode },

    #[error("malformed rate payload: {0}")]
    Payload(String),
}

/// Failure of a single conversion request.
///
/// All variants are recoverable at the presentation boundary; the core never
/// panics on bad input or a bad remote response.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("invalid amount: {input:?} is not a finite number")]
    InvalidAmount { input: String },

    #[error("currency not found: {code} in rates for {base}")]
    UnknownCurrency { code: String, base: String },

    #[error("failed to fetch rates: {0}")]
    Fetch(#[from] FetchError),
}
