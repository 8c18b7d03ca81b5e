//! The `TaxCalculator` implementation

use crate::{TaxRates, rates::{RateModel, estimate}};
use anyhow::{Result, bail};
use tax::{
    TaxCalculator, TaxRequest, TaxResult,
    reqwest::{Method, header},
};

impl TaxCalculator for TaxRates {
    fn kind(&self) -> &'static str {
        "taxrates"
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn compute_tax(&self, request: &TaxRequest) -> Result<TaxResult> {
        let address = &request.address;
        let response = self
            .client
            .request(Method::GET, format!("{}/taxrates/byaddress", self.endpoint))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .query(&[
                ("line1", address.line1.as_str()),
                ("city", address.city.as_str()),
                ("region", address.region.as_str()),
                ("postalCode", address.postal_code.as_str()),
                ("country", address.country.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("response ({status}): {text}");
        if !status.is_success() {
            bail!("taxrates lookup for invoice {} failed with {status}: {text}", request.invoice_id);
        }

        let rates: RateModel = serde_json::from_str(&text)?;
        Ok(estimate(request, &rates))
    }
}
