// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use rust_decimal::Decimal;
use std::str::FromStr;

use crate::{Form, Item};

pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

pub fn create_test_item(name: &str) -> Item {
    Item::new(name, dec("10"), dec("15"), 2)
}

pub fn create_test_form() -> Form {
    Form::new(dec("1"), dec("20"), dec("5"), dec("0.3"))
        .with_line_item(create_test_item("Widget"))
        .with_line_item(create_test_item("Gadget"))
}
