//! The AvaTax provider client
//!
//! Transaction-based tax calculation against the full AvaTax REST API.
//! Authenticates with HTTP Basic credentials derived from the account
//! number and license key.

pub use request::{CreateTransactionModel, TransactionModel};

mod calc;
mod request;

use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use tax::{
    Client,
    reqwest::header::{self, HeaderMap},
};
use url::Url;

/// The AvaTax tax-calculation client.
#[derive(Debug, Clone)]
pub struct AvaTax {
    /// The shared HTTP client.
    client: Client,
    /// Base API endpoint, without a trailing slash.
    endpoint: String,
    /// Prepared request headers (JSON plus basic authorization).
    headers: HeaderMap,
}

impl AvaTax {
    /// Create a client bound to `url` with account credentials.
    pub fn new(
        client: Client,
        url: &str,
        account_number: &str,
        license_key: &str,
    ) -> Result<Self> {
        Url::parse(url).with_context(|| format!("invalid avatax url: {url}"))?;
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse()?);
        headers.insert(header::ACCEPT, "application/json".parse()?);
        let credentials = STANDARD.encode(format!("{account_number}:{license_key}"));
        headers.insert(header::AUTHORIZATION, format!("Basic {credentials}").parse()?);
        Ok(Self {
            client,
            endpoint: url.trim_end_matches('/').to_owned(),
            headers,
        })
    }
}
