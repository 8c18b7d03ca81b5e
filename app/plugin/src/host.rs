//! Host collaborator contracts.
//!
//! The host injects persistence, clock, and registration explicitly as
//! constructor parameters; nothing is inherited from shared context.
//! Traits stay dyn-free — collaborators are generic parameters end to
//! end.

use crate::adapter::TaxAdapter;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tax::{Address, TaxResult};

/// An invoice as presented by the host's invoicing pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    /// Invoice identifier, unique within the host.
    pub id: String,
    /// Billing account the invoice belongs to.
    pub account_id: String,
    /// Invoice date.
    pub date: NaiveDate,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Destination address.
    pub address: Address,
    /// Invoice lines subject to tax.
    pub lines: Vec<InvoiceLine>,
}

/// One taxable invoice line.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceLine {
    /// Line identifier.
    pub id: String,
    /// Optional line description.
    pub description: Option<String>,
    /// Taxable amount.
    pub amount: Decimal,
}

/// A recorded tax computation keyed by invoice identity.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxComputation {
    /// Invoice this computation belongs to.
    pub invoice_id: String,
    /// Provider kind that produced the result.
    pub provider: String,
    /// The computed result.
    pub result: TaxResult,
    /// Wall-clock timestamp of the computation.
    pub computed_at: DateTime<Utc>,
}

/// Persistence collaborator recording computed tax results.
///
/// Implemented by the host. Uniqueness per invoice is the store's
/// guarantee and is what makes adapter invocations idempotent.
#[allow(async_fn_in_trait)]
pub trait TaxStore {
    /// Look up a previously recorded computation for an invoice.
    async fn find(&self, invoice_id: &str) -> Result<Option<TaxComputation>>;

    /// Record a completed computation.
    async fn record(&self, computation: &TaxComputation) -> Result<()>;
}

/// Wall-clock time source used for record keeping.
pub trait Clock {
    /// Current timestamp; monotonically non-decreasing wall-clock time.
    fn now(&self) -> DateTime<Utc>;
}

/// Default clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Host plugin registry accepting the invoice-tax capability.
pub trait Registrar {
    /// Register the adapter under a well-known plugin identifier.
    fn register<S, C>(&self, plugin_name: &str, adapter: TaxAdapter<S, C>) -> Result<()>
    where
        S: TaxStore + Send + Sync + 'static,
        C: Clock + Send + Sync + 'static;
}
