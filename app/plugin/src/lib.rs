//! Tax plugin — binds the billing host's invoicing pipeline to one of two
//! mutually exclusive external tax-calculation providers.
//!
//! `config` resolves the host's property map into provider candidates,
//! `bootstrap::start` activates at most one of them (AvaTax first,
//! TaxRates as the fallback) and registers a `TaxAdapter` with the host
//! under [`bootstrap::PLUGIN_NAME`]. Selection happens once per process
//! lifetime; reconfiguration requires a restart.

pub mod adapter;
pub mod bootstrap;
pub mod config;
pub mod host;
pub mod provider;

pub use {
    adapter::TaxAdapter,
    bootstrap::{Collaborators, PLUGIN_NAME, start},
    config::{AvaTaxConfig, ConfigError, ProviderConfig, ResolvedConfig, TaxRatesConfig, resolve},
    host::{Clock, Invoice, InvoiceLine, Registrar, SystemClock, TaxComputation, TaxStore},
    provider::{TaxProvider, build_provider},
};
