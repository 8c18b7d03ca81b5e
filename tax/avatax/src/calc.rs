//! The `TaxCalculator` implementation

use crate::{AvaTax, request::{CreateTransactionModel, TransactionModel}};
use anyhow::{Result, bail};
use tax::{TaxCalculator, TaxRequest, TaxResult, reqwest::Method};

impl TaxCalculator for AvaTax {
    fn kind(&self) -> &'static str {
        "avatax"
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn compute_tax(&self, request: &TaxRequest) -> Result<TaxResult> {
        let body = CreateTransactionModel::from(request);
        tracing::debug!("request: {}", serde_json::to_string(&body)?);
        let response = self
            .client
            .request(Method::POST, format!("{}/transactions/create", self.endpoint))
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("response ({status}): {text}");
        if !status.is_success() {
            bail!("avatax transaction for invoice {} failed with {status}: {text}", request.invoice_id);
        }

        let transaction: TransactionModel = serde_json::from_str(&text)?;
        Ok(transaction.into_result())
    }
}
