// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use profit_calc_domain::{Form, Item};
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

/// One item at cost 10 / price 15 × 2, one labor hour at 20, overheads 5,
/// target 0.3.
pub fn create_scenario_form() -> Form {
    Form::new(dec("1"), dec("20"), dec("5"), dec("0.3")).with_line_item(Item::new(
        "Widget",
        dec("10"),
        dec("15"),
        2,
    ))
}

/// A profitable three-item form with no labor or overheads.
pub fn create_profitable_form() -> Form {
    Form::new(dec("0"), dec("0"), dec("0"), dec("0.25"))
        .with_line_item(Item::new("Chair", dec("40"), dec("100"), 4))
        .with_line_item(Item::new("Table", dec("150"), dec("300"), 1))
        .with_line_item(Item::new("Lamp", dec("12.50"), dec("19.99"), 3))
}

pub fn create_labor_only_form() -> Form {
    Form::new(dec("7.5"), dec("42"), dec("120"), dec("0.2"))
}
