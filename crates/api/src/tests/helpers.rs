// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::{CalculationRequest, LineItemRequest};

pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

pub fn create_test_line_item(name: &str, cost: &str, price: &str, quantity: i64) -> LineItemRequest {
    LineItemRequest {
        name: String::from(name),
        cost_price: dec(cost),
        sell_price: dec(price),
        quantity,
        additional_info: None,
    }
}

/// Cost 45, revenue 30, target 0.3.
pub fn create_test_request() -> CalculationRequest {
    CalculationRequest {
        line_items: vec![create_test_line_item("Widget", "10", "15", 2)],
        labor_hours: dec("1"),
        labor_cost_per_hour: dec("20"),
        fixed_overheads: dec("5"),
        target_profit_margin: dec("0.3"),
    }
}

pub fn create_empty_request() -> CalculationRequest {
    CalculationRequest {
        line_items: Vec::new(),
        labor_hours: dec("0"),
        labor_cost_per_hour: dec("0"),
        fixed_overheads: dec("0"),
        target_profit_margin: dec("0"),
    }
}
