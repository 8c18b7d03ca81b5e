//! Computed tax results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Computed tax for one invoice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxResult {
    /// Total tax across all items.
    pub total_tax: Decimal,
    /// Per-line tax items.
    pub items: Vec<TaxItem>,
}

/// One computed tax line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxItem {
    /// Invoice line this item applies to.
    pub line_id: String,
    /// Tax name as reported by the provider (for example a jurisdiction).
    pub name: String,
    /// Applied rate.
    pub rate: Decimal,
    /// Tax amount.
    pub amount: Decimal,
}
