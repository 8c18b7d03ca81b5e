//! Wire models and local rate math for the TaxRates API.

use rust_decimal::Decimal;
use serde::Deserialize;
use tax::{TaxItem, TaxRequest, TaxResult};

/// Response body for `GET /taxrates/byaddress`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateModel {
    /// Combined rate across all components.
    #[serde(default)]
    pub total_rate: Decimal,
    /// Per-jurisdiction rate components.
    #[serde(default)]
    pub rates: Vec<RateDetailModel>,
}

/// One jurisdiction rate component.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateDetailModel {
    /// Jurisdiction name.
    pub name: String,
    /// Rate component.
    #[serde(default)]
    pub rate: Decimal,
}

/// Derive per-line tax items from jurisdiction rates.
///
/// The rates service returns rates only; amounts are computed locally as
/// `line amount × component rate`, one item per line and component, with
/// the invoice total summed across all items.
pub fn estimate(request: &TaxRequest, rates: &RateModel) -> TaxResult {
    let mut items = Vec::new();
    let mut total_tax = Decimal::ZERO;
    for line in &request.lines {
        for detail in &rates.rates {
            let amount = line.amount * detail.rate;
            total_tax += amount;
            items.push(TaxItem {
                line_id: line.id.clone(),
                name: detail.name.clone(),
                rate: detail.rate,
                amount,
            });
        }
    }
    TaxResult { total_tax, items }
}
