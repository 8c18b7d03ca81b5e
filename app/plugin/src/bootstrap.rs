//! One-shot plugin bootstrap: resolve settings, select a provider, build
//! the adapter, register it with the host.

use crate::{
    adapter::TaxAdapter,
    config::{self, ProviderConfig},
    host::{Clock, Registrar, TaxStore},
    provider::build_provider,
};
use anyhow::Result;
use std::{collections::HashMap, sync::Arc};
use tax::{Client, TaxCalculator};

/// Fixed identifier under which the capability is registered.
pub const PLUGIN_NAME: &str = "taxbridge";

/// Host-supplied collaborators injected into the adapter.
pub struct Collaborators<S, C, R> {
    /// Persistence for computed tax results.
    pub store: Arc<S>,
    /// Wall-clock time source.
    pub clock: Arc<C>,
    /// Host plugin registry.
    pub registrar: R,
}

/// Resolve configuration, activate a provider, and register the adapter.
///
/// Runs exactly once per process lifetime. Strict two-branch priority: a
/// complete AvaTax configuration always wins, TaxRates is the fallback,
/// and neither complete aborts startup with [`config::ConfigError::Incomplete`]
/// before anything is registered.
pub fn start<S, C, R>(
    settings: &HashMap<String, String>,
    collaborators: Collaborators<S, C, R>,
) -> Result<()>
where
    S: TaxStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    R: Registrar,
{
    let resolved = config::resolve(settings)?;
    if resolved.is_ambiguous() {
        tracing::warn!("both avatax and taxrates are fully configured; activating avatax");
    }

    let network = resolved.network.clone();
    let selected = resolved.select()?;
    let company_code = match &selected {
        ProviderConfig::AvaTax(cfg) => cfg.company_code.clone(),
        ProviderConfig::TaxRates(_) => None,
    };

    let client = Client::build(&network)?;
    let provider = build_provider(&selected, client)?;
    tracing::info!(
        provider = provider.kind(),
        endpoint = provider.endpoint(),
        "tax provider activated"
    );

    let adapter = TaxAdapter::new(
        provider,
        company_code,
        collaborators.store,
        collaborators.clock,
    );
    collaborators.registrar.register(PLUGIN_NAME, adapter)
}
