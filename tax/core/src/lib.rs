//! Unified tax-calculation interface shared by all provider clients.
//!
//! Defines the `TaxCalculator` capability, the invoice-scoped request and
//! result types, and the shared HTTP `Client` built once from
//! `NetworkOptions`. Provider crates implement `TaxCalculator` against
//! these types; the plugin crate dispatches over whichever provider was
//! activated at startup.

pub use reqwest;

pub use {
    client::{Client, NetworkOptions},
    request::{Address, TaxRequest, TaxableLine},
    result::{TaxItem, TaxResult},
};

mod client;
mod request;
mod result;

use anyhow::Result;

/// The tax-calculation capability implemented by every provider client.
///
/// One interface for both providers so the adapter is written once and
/// parameterized by whichever client was constructed.
#[allow(async_fn_in_trait)]
pub trait TaxCalculator {
    /// Short provider kind string for logging and registration metadata.
    fn kind(&self) -> &'static str;

    /// Base endpoint this client is bound to.
    fn endpoint(&self) -> &str;

    /// Compute tax line items for a single invoice-scoped request.
    ///
    /// Failures must propagate: a provider error is never converted into
    /// an empty or zero-tax result.
    async fn compute_tax(&self, request: &TaxRequest) -> Result<TaxResult>;
}
