//! Invoice-scoped tax request types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A request for tax computation over one invoice.
///
/// Carries everything a provider needs per call; no state is shared
/// between requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxRequest {
    /// Invoice identifier, used as the provider-side document code.
    pub invoice_id: String,
    /// Billing account the invoice belongs to.
    pub account_id: String,
    /// Company code for providers that scope transactions to a company.
    pub company_code: Option<String>,
    /// Invoice date.
    pub date: NaiveDate,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Destination address used for jurisdiction lookup.
    pub address: Address,
    /// Taxable invoice lines.
    pub lines: Vec<TaxableLine>,
}

/// Postal address used for jurisdiction lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    /// Street line.
    pub line1: String,
    /// City.
    pub city: String,
    /// State or province code.
    pub region: String,
    /// Postal code.
    pub postal_code: String,
    /// ISO 3166 country code.
    pub country: String,
}

/// One taxable line of an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxableLine {
    /// Line identifier, echoed back on computed items.
    pub id: String,
    /// Optional line description forwarded to the provider.
    pub description: Option<String>,
    /// Taxable amount.
    pub amount: Decimal,
}
