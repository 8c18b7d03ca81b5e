//! Provider enum for runtime dispatch across tax backends.
//!
//! Each variant wraps a concrete client; the `TaxCalculator` impl
//! delegates, so the adapter is written once and parameterized by
//! whichever provider was activated.

use crate::config::ProviderConfig;
use anyhow::Result;
use avatax::AvaTax;
use tax::{Client, TaxCalculator, TaxRequest, TaxResult};
use taxrates::TaxRates;

/// Unified tax provider enum.
#[derive(Debug, Clone)]
pub enum TaxProvider {
    /// Full transaction-based AvaTax client.
    AvaTax(AvaTax),
    /// Rates-only TaxRates client.
    TaxRates(TaxRates),
}

/// Construct a `TaxProvider` from the selected configuration and a shared
/// HTTP client.
pub fn build_provider(config: &ProviderConfig, client: Client) -> Result<TaxProvider> {
    let provider = match config {
        ProviderConfig::AvaTax(cfg) => TaxProvider::AvaTax(AvaTax::new(
            client,
            &cfg.url,
            &cfg.account_number,
            &cfg.license_key,
        )?),
        ProviderConfig::TaxRates(cfg) => {
            TaxProvider::TaxRates(TaxRates::new(client, &cfg.url, &cfg.api_key)?)
        }
    };
    Ok(provider)
}

impl TaxCalculator for TaxProvider {
    fn kind(&self) -> &'static str {
        match self {
            Self::AvaTax(p) => p.kind(),
            Self::TaxRates(p) => p.kind(),
        }
    }

    fn endpoint(&self) -> &str {
        match self {
            Self::AvaTax(p) => p.endpoint(),
            Self::TaxRates(p) => p.endpoint(),
        }
    }

    async fn compute_tax(&self, request: &TaxRequest) -> Result<TaxResult> {
        match self {
            Self::AvaTax(p) => p.compute_tax(request).await,
            Self::TaxRates(p) => p.compute_tax(request).await,
        }
    }
}
