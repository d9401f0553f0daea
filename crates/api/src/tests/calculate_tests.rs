// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use profit_calc_domain::AdditionalInfo;
use serde_json::{Map, Value, json};

use super::helpers::{create_empty_request, create_test_line_item, create_test_request, dec};
use crate::{ApiError, CalculationRequest, CalculationResponse, MarginStatus, calculate};

#[test]
fn test_calculate_loss_making_request() {
    let response: CalculationResponse = calculate(create_test_request()).unwrap();

    assert_eq!(response.total_cost, dec("45"));
    assert_eq!(response.total_revenue, dec("30"));
    assert_eq!(response.profit, dec("-15"));
    assert_eq!(response.margin, Some(dec("-0.5")));
    assert_eq!(response.margin_gap, Some(dec("-0.8")));
    assert_eq!(response.margin_status, MarginStatus::BelowTarget);
    assert_eq!(response.target_profit_margin, dec("0.3"));
    assert_eq!(response.line_items.len(), 1);
    assert_eq!(response.line_items[0].revenue, dec("30"));
}

#[test]
fn test_calculate_meets_target() {
    let mut request: CalculationRequest = create_test_request();
    request.line_items[0].sell_price = dec("100");

    let response: CalculationResponse = calculate(request).unwrap();

    // revenue 200, cost 45
    assert_eq!(response.profit, dec("155"));
    assert_eq!(response.margin, Some(dec("0.775")));
    assert_eq!(response.margin_status, MarginStatus::MeetsTarget);
    assert_eq!(response.revenue_shortfall, Some(dec("0")));
}

#[test]
fn test_zero_revenue_is_undefined_not_error() {
    let response: CalculationResponse = calculate(create_empty_request()).unwrap();

    assert_eq!(response.margin, None);
    assert_eq!(response.margin_gap, None);
    assert_eq!(response.margin_status, MarginStatus::Undefined);
    assert_eq!(response.total_cost, dec("0"));
    assert!(response.line_items.is_empty());
}

#[test]
fn test_undefined_margin_still_reports_costs() {
    let mut request: CalculationRequest = create_empty_request();
    request.labor_hours = dec("4");
    request.labor_cost_per_hour = dec("25");
    request.fixed_overheads = dec("10");
    request.target_profit_margin = dec("0.2");

    let response: CalculationResponse = calculate(request).unwrap();

    assert_eq!(response.margin_status, MarginStatus::Undefined);
    assert_eq!(response.labor_cost, dec("100"));
    assert_eq!(response.total_cost, dec("110"));
    assert_eq!(response.profit, dec("-110"));
    assert_eq!(response.target_profit_margin, dec("0.2"));
    assert_eq!(response.required_revenue, None);
}

#[test]
fn test_negative_labor_hours_names_field() {
    let mut request: CalculationRequest = create_test_request();
    request.labor_hours = dec("-2");

    let result: Result<CalculationResponse, ApiError> = calculate(request);
    assert_eq!(
        result,
        Err(ApiError::InvalidInput {
            field: String::from("labor_hours"),
            message: String::from("must not be negative, got -2"),
        })
    );
}

#[test]
fn test_negative_item_fields_name_the_item() {
    let mut request: CalculationRequest = create_test_request();
    request
        .line_items
        .push(create_test_line_item("Broken", "1", "-3", 1));

    let err: ApiError = calculate(request).unwrap_err();
    assert_eq!(err.field(), Some("line_items[1].sell_price"));

    let mut request: CalculationRequest = create_test_request();
    request.line_items[0].quantity = -4;

    let err: ApiError = calculate(request).unwrap_err();
    assert_eq!(err.field(), Some("line_items[0].quantity"));
}

#[test]
fn test_out_of_range_target_is_invalid_input() {
    let mut request: CalculationRequest = create_test_request();
    request.target_profit_margin = dec("30");

    let err: ApiError = calculate(request).unwrap_err();
    assert_eq!(err.field(), Some("target_profit_margin"));
}

#[test]
fn test_additional_info_round_trips_through_calculation() {
    let mut info: Map<String, Value> = Map::new();
    info.insert(String::from("sku"), json!("W-001"));
    info.insert(String::from("tags"), json!(["blue", "large"]));

    let mut request: CalculationRequest = create_test_request();
    request.line_items[0].additional_info = Some(info);

    let response: CalculationResponse = calculate(request).unwrap();
    let echoed: &AdditionalInfo = &response.line_items[0].additional_info;

    assert_eq!(echoed.get("sku"), Some(&json!("W-001")));
    assert_eq!(echoed.get("tags"), Some(&json!(["blue", "large"])));
}

#[test]
fn test_calculate_is_idempotent() {
    let first: CalculationResponse = calculate(create_test_request()).unwrap();
    let second: CalculationResponse = calculate(create_test_request()).unwrap();

    assert_eq!(first, second);
}
