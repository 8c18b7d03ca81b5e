//! Tests for local rate math.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tax::{Address, TaxRequest, TaxableLine};
use taxbridge_taxrates::{RateModel, estimate};

fn request(lines: Vec<TaxableLine>) -> TaxRequest {
    TaxRequest {
        invoice_id: "inv-1".to_owned(),
        account_id: "acct-9".to_owned(),
        company_code: None,
        date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        currency: "USD".to_owned(),
        address: Address {
            line1: "100 Market St".to_owned(),
            city: "San Francisco".to_owned(),
            region: "CA".to_owned(),
            postal_code: "94105".to_owned(),
            country: "US".to_owned(),
        },
        lines,
    }
}

fn line(id: &str, amount: Decimal) -> TaxableLine {
    TaxableLine {
        id: id.to_owned(),
        description: None,
        amount,
    }
}

#[test]
fn estimate_applies_each_rate_component_per_line() {
    let rates: RateModel = serde_json::from_str(
        r#"{
            "totalRate": "0.086",
            "rates": [
                {"name": "CA STATE TAX", "rate": "0.06"},
                {"name": "CA COUNTY TAX", "rate": "0.026"}
            ]
        }"#,
    )
    .unwrap();
    let request = request(vec![
        line("item-1", Decimal::new(10000, 2)),
        line("item-2", Decimal::new(5000, 2)),
    ]);

    let result = estimate(&request, &rates);
    assert_eq!(result.items.len(), 4);
    // 100.00 × 0.06
    assert_eq!(result.items[0].line_id, "item-1");
    assert_eq!(result.items[0].name, "CA STATE TAX");
    assert_eq!(result.items[0].amount, Decimal::new(60000, 4));
    // 50.00 × 0.026
    assert_eq!(result.items[3].line_id, "item-2");
    assert_eq!(result.items[3].amount, Decimal::new(13000, 4));
    // (100.00 + 50.00) × 0.086
    assert_eq!(result.total_tax, Decimal::new(129000, 4));
}

#[test]
fn estimate_with_no_rates_is_empty() {
    let rates: RateModel = serde_json::from_str("{}").unwrap();
    let request = request(vec![line("item-1", Decimal::new(10000, 2))]);

    let result = estimate(&request, &rates);
    assert!(result.items.is_empty());
    assert_eq!(result.total_tax, Decimal::ZERO);
}
