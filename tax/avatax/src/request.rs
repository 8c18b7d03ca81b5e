//! Wire models for the AvaTax transactions API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tax::{Address, TaxItem, TaxRequest, TaxResult, TaxableLine};

/// Request body for `POST /transactions/create`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionModel {
    /// Document code; the invoice identifier.
    pub code: String,
    /// Document type. Always `SalesInvoice` here.
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Company the transaction is scoped to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_code: Option<String>,
    /// Document date.
    pub date: NaiveDate,
    /// Customer code; the billing account identifier.
    pub customer_code: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Whether to commit the transaction provider-side.
    pub commit: bool,
    /// Document addresses.
    pub addresses: AddressesModel,
    /// Document lines.
    pub lines: Vec<LineItemModel>,
}

impl From<&TaxRequest> for CreateTransactionModel {
    fn from(request: &TaxRequest) -> Self {
        Self {
            code: request.invoice_id.clone(),
            doc_type: "SalesInvoice".to_owned(),
            company_code: request.company_code.clone(),
            date: request.date,
            customer_code: request.account_id.clone(),
            currency_code: request.currency.clone(),
            // Committing is the host's billing decision, not the shim's.
            commit: false,
            addresses: AddressesModel {
                single_location: AddressLocationModel::from(&request.address),
            },
            lines: request.lines.iter().map(LineItemModel::from).collect(),
        }
    }
}

/// Document addresses; a single destination location.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressesModel {
    /// The destination address applied to every line.
    pub single_location: AddressLocationModel,
}

/// One document address.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressLocationModel {
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

impl From<&Address> for AddressLocationModel {
    fn from(address: &Address) -> Self {
        Self {
            line1: address.line1.clone(),
            city: address.city.clone(),
            region: address.region.clone(),
            postal_code: address.postal_code.clone(),
            country: address.country.clone(),
        }
    }
}

/// One document line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemModel {
    /// Line number; the invoice line identifier.
    pub number: String,
    /// Taxable amount.
    pub amount: Decimal,
    /// Optional line description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&TaxableLine> for LineItemModel {
    fn from(line: &TaxableLine) -> Self {
        Self {
            number: line.id.clone(),
            amount: line.amount,
            description: line.description.clone(),
        }
    }
}

/// Response body for a created transaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionModel {
    /// Total tax across the document.
    #[serde(default)]
    pub total_tax: Decimal,
    /// Calculated lines.
    #[serde(default)]
    pub lines: Vec<TransactionLineModel>,
}

/// One calculated transaction line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionLineModel {
    /// Line number as submitted.
    pub line_number: String,
    /// Per-jurisdiction tax details.
    #[serde(default)]
    pub details: Vec<TransactionLineDetailModel>,
}

/// One jurisdiction detail of a calculated line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionLineDetailModel {
    /// Jurisdiction tax name.
    #[serde(default)]
    pub tax_name: Option<String>,
    /// Applied rate.
    #[serde(default)]
    pub rate: Decimal,
    /// Tax amount for this detail.
    #[serde(default)]
    pub tax: Decimal,
}

impl TransactionModel {
    /// Map the provider transaction into the unified result type.
    ///
    /// One `TaxItem` per line detail, so jurisdiction-level amounts stay
    /// visible to the host.
    pub fn into_result(self) -> TaxResult {
        let mut items = Vec::new();
        for line in self.lines {
            for detail in line.details {
                items.push(TaxItem {
                    line_id: line.line_number.clone(),
                    name: detail.tax_name.unwrap_or_else(|| "tax".to_owned()),
                    rate: detail.rate,
                    amount: detail.tax,
                });
            }
        }
        TaxResult {
            total_tax: self.total_tax,
            items,
        }
    }
}
