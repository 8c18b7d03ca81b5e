//! Tests for transaction wire-model mapping.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tax::{Address, TaxRequest, TaxableLine};
use taxbridge_avatax::{CreateTransactionModel, TransactionModel};

fn request() -> TaxRequest {
    TaxRequest {
        invoice_id: "inv-1".to_owned(),
        account_id: "acct-9".to_owned(),
        company_code: Some("C1".to_owned()),
        date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        currency: "USD".to_owned(),
        address: Address {
            line1: "100 Market St".to_owned(),
            city: "San Francisco".to_owned(),
            region: "CA".to_owned(),
            postal_code: "94105".to_owned(),
            country: "US".to_owned(),
        },
        lines: vec![TaxableLine {
            id: "item-1".to_owned(),
            description: Some("subscription".to_owned()),
            amount: Decimal::new(10000, 2),
        }],
    }
}

#[test]
fn transaction_request_carries_invoice_fields() {
    let model = CreateTransactionModel::from(&request());
    let json = serde_json::to_value(&model).unwrap();
    assert_eq!(json["code"], "inv-1");
    assert_eq!(json["type"], "SalesInvoice");
    assert_eq!(json["companyCode"], "C1");
    assert_eq!(json["customerCode"], "acct-9");
    assert_eq!(json["currencyCode"], "USD");
    assert_eq!(json["commit"], false);
    assert_eq!(json["date"], "2026-01-15");
    assert_eq!(json["addresses"]["singleLocation"]["postalCode"], "94105");
    assert_eq!(json["lines"][0]["number"], "item-1");
}

#[test]
fn transaction_request_omits_absent_company_code() {
    let mut request = request();
    request.company_code = None;
    let json = serde_json::to_value(CreateTransactionModel::from(&request)).unwrap();
    assert!(json.get("companyCode").is_none());
}

#[test]
fn transaction_response_maps_line_details() {
    let json = r#"{
        "totalTax": "8.60",
        "lines": [{
            "lineNumber": "item-1",
            "details": [
                {"taxName": "CA STATE TAX", "rate": "0.06", "tax": "6.00"},
                {"taxName": "CA COUNTY TAX", "rate": "0.026", "tax": "2.60"}
            ]
        }]
    }"#;
    let model: TransactionModel = serde_json::from_str(json).unwrap();
    let result = model.into_result();
    assert_eq!(result.total_tax, Decimal::new(860, 2));
    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0].line_id, "item-1");
    assert_eq!(result.items[0].name, "CA STATE TAX");
    assert_eq!(result.items[0].amount, Decimal::new(600, 2));
    assert_eq!(result.items[1].rate, Decimal::new(26, 3));
}

#[test]
fn transaction_response_tolerates_missing_fields() {
    let model: TransactionModel = serde_json::from_str("{}").unwrap();
    let result = model.into_result();
    assert_eq!(result.total_tax, Decimal::ZERO);
    assert!(result.items.is_empty());
}
