//! The TaxRates provider client
//!
//! Rates-only fallback service: fetches jurisdiction rates for the
//! destination address and derives per-line tax amounts locally. Lighter
//! than the transaction API — a single API key, no account scoping.

pub use rates::{RateDetailModel, RateModel, estimate};

mod calc;
mod rates;

use anyhow::{Context, Result};
use tax::Client;
use url::Url;

/// The TaxRates client.
#[derive(Debug, Clone)]
pub struct TaxRates {
    /// The shared HTTP client.
    client: Client,
    /// Base API endpoint, without a trailing slash.
    endpoint: String,
    /// Bearer API key.
    api_key: String,
}

impl TaxRates {
    /// Create a client bound to `url` authenticating with `api_key`.
    pub fn new(client: Client, url: &str, api_key: &str) -> Result<Self> {
        Url::parse(url).with_context(|| format!("invalid taxrates url: {url}"))?;
        Ok(Self {
            client,
            endpoint: url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        })
    }
}
