//! Tests for TaxRates client construction.

use tax::{Client, TaxCalculator};
use taxbridge_taxrates::TaxRates;

#[test]
fn constructor_binds_endpoint() {
    let taxrates = TaxRates::new(Client::new(), "https://rates.example", "K2").expect("client");
    assert_eq!(taxrates.kind(), "taxrates");
    assert_eq!(taxrates.endpoint(), "https://rates.example");
}

#[test]
fn constructor_trims_trailing_slash() {
    let taxrates = TaxRates::new(Client::new(), "https://rates.example/", "K2").expect("client");
    assert_eq!(taxrates.endpoint(), "https://rates.example");
}

#[test]
fn constructor_rejects_invalid_url() {
    assert!(TaxRates::new(Client::new(), "not a url", "K2").is_err());
}
