// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;

use crate::error::DomainError;
use crate::types::{Form, Item};

/// Field name reported for target margin violations.
pub const TARGET_MARGIN_FIELD: &str = "target_profit_margin";

/// Builds the field path for a line item field, e.g. `line_items[2].quantity`.
#[must_use]
pub fn item_field(index: usize, name: &str) -> String {
    format!("line_items[{index}].{name}")
}

fn ensure_non_negative(field: String, value: Decimal) -> Result<(), DomainError> {
    if value < Decimal::ZERO {
        return Err(DomainError::NegativeAmount { field, value });
    }
    Ok(())
}

/// Validates a single line item.
///
/// # Arguments
///
/// * `index` - The item's position in the form, used in error field paths
/// * `item` - The item to validate
///
/// # Errors
///
/// Returns an error if the cost price, sell price, or quantity is negative.
pub fn validate_item(index: usize, item: &Item) -> Result<(), DomainError> {
    ensure_non_negative(item_field(index, "cost_price"), item.cost_price)?;
    ensure_non_negative(item_field(index, "sell_price"), item.sell_price)?;

    if item.quantity < 0 {
        return Err(DomainError::NegativeQuantity {
            field: item_field(index, "quantity"),
            quantity: item.quantity,
        });
    }

    Ok(())
}

/// Validates that a target margin is a fraction between 0 and 1 inclusive.
///
/// A percentage such as `30` is rejected rather than reinterpreted.
///
/// # Errors
///
/// Returns `DomainError::InvalidTargetMargin` if the value is out of range.
pub fn validate_target_margin(value: Decimal) -> Result<(), DomainError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(DomainError::InvalidTargetMargin { value });
    }
    Ok(())
}

/// Validates every numeric field of a form.
///
/// Form-level fields are checked first, then line items in order.
/// The first violation is returned. Values are never clamped.
///
/// # Arguments
///
/// * `form` - The form to validate
///
/// # Errors
///
/// Returns an error if:
/// - Labor hours, labor rate, or fixed overheads are negative
/// - The target margin is outside `[0, 1]`
/// - Any line item has a negative price or quantity
pub fn validate_form(form: &Form) -> Result<(), DomainError> {
    ensure_non_negative(String::from("labor_hours"), form.labor_hours)?;
    ensure_non_negative(
        String::from("labor_cost_per_hour"),
        form.labor_cost_per_hour,
    )?;
    ensure_non_negative(String::from("fixed_overheads"), form.fixed_overheads)?;
    validate_target_margin(form.target_profit_margin)?;

    for (index, item) in form.line_items.iter().enumerate() {
        validate_item(index, item)?;
    }

    Ok(())
}
