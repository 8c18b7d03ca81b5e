//! The invoice-tax adapter registered with the host.

use crate::{
    host::{Clock, Invoice, TaxComputation, TaxStore},
    provider::TaxProvider,
};
use anyhow::Result;
use std::sync::Arc;
use tax::{TaxCalculator, TaxItem, TaxRequest, TaxableLine};

/// Adapter satisfying the host's invoice-tax capability.
///
/// Owns its provider client exclusively; shares the store and clock with
/// the host. Constructed once at bootstrap and immutable afterwards, so
/// concurrent invocations across invoices are safe — every call works on
/// its own request state.
pub struct TaxAdapter<S, C> {
    provider: TaxProvider,
    company_code: Option<String>,
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TaxAdapter<S, C>
where
    S: TaxStore + Send + Sync,
    C: Clock + Send + Sync,
{
    /// Wrap an activated provider with its host collaborators.
    pub fn new(
        provider: TaxProvider,
        company_code: Option<String>,
        store: Arc<S>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            provider,
            company_code,
            store,
            clock,
        }
    }

    /// Kind of the bound provider.
    pub fn kind(&self) -> &'static str {
        self.provider.kind()
    }

    /// Endpoint of the bound provider.
    pub fn endpoint(&self) -> &str {
        self.provider.endpoint()
    }

    /// Compute tax line items for an invoice.
    ///
    /// A previously recorded computation for the same invoice is returned
    /// as-is. Otherwise the provider is called, the result stamped with
    /// the clock and recorded. Provider failures propagate — they are
    /// never replaced with an empty or zero-tax result.
    pub async fn compute(&self, invoice: &Invoice) -> Result<Vec<TaxItem>> {
        if let Some(prior) = self.store.find(&invoice.id).await? {
            tracing::debug!(invoice = %invoice.id, "returning recorded tax computation");
            return Ok(prior.result.items);
        }

        let request = self.request_for(invoice);
        let result = self.provider.compute_tax(&request).await?;
        let computation = TaxComputation {
            invoice_id: invoice.id.clone(),
            provider: self.provider.kind().to_owned(),
            result,
            computed_at: self.clock.now(),
        };
        self.store.record(&computation).await?;
        Ok(computation.result.items)
    }

    fn request_for(&self, invoice: &Invoice) -> TaxRequest {
        TaxRequest {
            invoice_id: invoice.id.clone(),
            account_id: invoice.account_id.clone(),
            company_code: self.company_code.clone(),
            date: invoice.date,
            currency: invoice.currency.clone(),
            address: invoice.address.clone(),
            lines: invoice
                .lines
                .iter()
                .map(|line| TaxableLine {
                    id: line.id.clone(),
                    description: line.description.clone(),
                    amount: line.amount,
                })
                .collect(),
        }
    }
}
