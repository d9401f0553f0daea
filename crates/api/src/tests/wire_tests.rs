// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::{Value, json};

use super::helpers::{create_empty_request, create_test_request, dec};
use crate::{CalculationRequest, CalculationResponse, calculate};

#[test]
fn test_request_accepts_numbers_and_strings() {
    let body: &str = r#"{
        "line_items": [
            {"name": "Widget", "cost_price": 10, "sell_price": "15.50", "quantity": 2}
        ],
        "labor_hours": 1.5,
        "labor_cost_per_hour": "20",
        "fixed_overheads": 0,
        "target_profit_margin": 0.3
    }"#;

    let request: CalculationRequest = serde_json::from_str(body).unwrap();

    assert_eq!(request.line_items[0].cost_price, dec("10"));
    assert_eq!(request.line_items[0].sell_price, dec("15.50"));
    assert_eq!(request.labor_hours, dec("1.5"));
    assert_eq!(request.line_items[0].additional_info, None);
}

#[test]
fn test_request_without_line_items() {
    let body: &str = r#"{
        "labor_hours": 2,
        "labor_cost_per_hour": 30,
        "fixed_overheads": 15,
        "target_profit_margin": 0.1
    }"#;

    let request: CalculationRequest = serde_json::from_str(body).unwrap();
    assert!(request.line_items.is_empty());
}

#[test]
fn test_request_rejects_fractional_quantity() {
    let body: &str = r#"{
        "line_items": [
            {"name": "Widget", "cost_price": 10, "sell_price": 15, "quantity": 1.5}
        ],
        "labor_hours": 0,
        "labor_cost_per_hour": 0,
        "fixed_overheads": 0,
        "target_profit_margin": 0
    }"#;

    let result: Result<CalculationRequest, serde_json::Error> = serde_json::from_str(body);
    assert!(result.is_err());
}

#[test]
fn test_undefined_margin_serializes_as_null() {
    let response: CalculationResponse = calculate(create_empty_request()).unwrap();
    let value: Value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["margin_status"], json!("undefined"));
    assert!(value["margin"].is_null());
    assert!(value["margin_gap"].is_null());
}

#[test]
fn test_response_serializes_amounts_as_strings() {
    let response: CalculationResponse = calculate(create_test_request()).unwrap();
    let value: Value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["margin_status"], json!("below_target"));
    assert_eq!(value["margin"], json!("-0.5"));
    assert_eq!(value["total_cost"], json!("45"));
    assert!(value["line_items"][0].get("additional_info").is_none());
}

#[test]
fn test_derived_ratios_serialize_without_trailing_zeros() {
    let mut request: CalculationRequest = create_test_request();
    request.line_items[0].sell_price = dec("100.00");

    let response: CalculationResponse = calculate(request).unwrap();
    let value: Value = serde_json::to_value(&response).unwrap();

    // profit 155.00 on revenue 200.00
    assert_eq!(value["margin"], json!("0.775"));
    assert_eq!(value["margin_gap"], json!("0.475"));
    assert_eq!(value["revenue_shortfall"], json!("0"));
}
