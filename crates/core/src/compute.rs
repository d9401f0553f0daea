// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Single-pass profitability computation.
//!
//! All arithmetic is exact decimal arithmetic. Overflow is reported as
//! `CoreError::ArithmeticOverflow` instead of panicking. Derived ratios
//! (margin, gap, required revenue) are normalized so they carry no
//! trailing zeros.

use profit_calc_domain::{Form, Item, validate_form};
use rust_decimal::Decimal;

use crate::error::CoreError;
use crate::report::{ItemBreakdown, MarginComparison, Report, TargetStatus, Totals};

fn overflow(operation: &str) -> CoreError {
    CoreError::ArithmeticOverflow {
        operation: operation.to_string(),
    }
}

fn add(lhs: Decimal, rhs: Decimal, operation: &str) -> Result<Decimal, CoreError> {
    lhs.checked_add(rhs).ok_or_else(|| overflow(operation))
}

fn sub(lhs: Decimal, rhs: Decimal, operation: &str) -> Result<Decimal, CoreError> {
    lhs.checked_sub(rhs).ok_or_else(|| overflow(operation))
}

fn mul(lhs: Decimal, rhs: Decimal, operation: &str) -> Result<Decimal, CoreError> {
    lhs.checked_mul(rhs).ok_or_else(|| overflow(operation))
}

fn div(lhs: Decimal, rhs: Decimal, operation: &str) -> Result<Decimal, CoreError> {
    lhs.checked_div(rhs).ok_or_else(|| overflow(operation))
}

fn breakdown_item(position: usize, item: &Item) -> Result<ItemBreakdown, CoreError> {
    let quantity: Decimal = Decimal::from(item.quantity);
    let cost: Decimal = mul(item.cost_price, quantity, "computing line item cost")?;
    let revenue: Decimal = mul(item.sell_price, quantity, "computing line item revenue")?;
    let profit: Decimal = sub(revenue, cost, "computing line item profit")?;

    Ok(ItemBreakdown {
        position,
        name: item.name.clone(),
        quantity: item.quantity,
        unit_cost: item.cost_price,
        unit_price: item.sell_price,
        cost,
        revenue,
        profit,
        additional_info: item.additional_info.clone(),
    })
}

/// Validates a form and computes every figure except the margin.
///
/// Never fails on zero revenue, so it is suitable for labor and
/// overhead only calculations.
///
/// # Arguments
///
/// * `form` - The form to compute
///
/// # Errors
///
/// Returns an error if:
/// - The form fails validation (`CoreError::InvalidInput`)
/// - A sum or product overflows (`CoreError::ArithmeticOverflow`)
pub fn compute_totals(form: &Form) -> Result<Totals, CoreError> {
    validate_form(form)?;

    let mut items: Vec<ItemBreakdown> = Vec::with_capacity(form.line_items.len());
    let mut item_cost: Decimal = Decimal::ZERO;
    let mut total_revenue: Decimal = Decimal::ZERO;

    for (position, item) in form.line_items.iter().enumerate() {
        let row: ItemBreakdown = breakdown_item(position, item)?;
        item_cost = add(item_cost, row.cost, "summing line item costs")?;
        total_revenue = add(total_revenue, row.revenue, "summing line item revenue")?;
        items.push(row);
    }

    let labor_cost: Decimal = mul(
        form.labor_hours,
        form.labor_cost_per_hour,
        "computing labor cost",
    )?;
    let total_cost: Decimal = add(
        add(item_cost, labor_cost, "adding labor cost")?,
        form.fixed_overheads,
        "adding fixed overheads",
    )?;
    let profit: Decimal = sub(total_revenue, total_cost, "computing profit")?;

    Ok(Totals {
        items,
        item_cost,
        labor_cost,
        fixed_overheads: form.fixed_overheads,
        total_cost,
        total_revenue,
        profit,
    })
}

/// Compares an actual margin with a target margin.
///
/// # Arguments
///
/// * `totals` - The aggregate figures the margin was derived from
/// * `actual` - The achieved margin (fraction)
/// * `target` - The requested margin (fraction, at most 1)
///
/// # Errors
///
/// Returns `CoreError::ArithmeticOverflow` if the required revenue
/// cannot be represented.
pub fn compare_margin(
    totals: &Totals,
    actual: Decimal,
    target: Decimal,
) -> Result<MarginComparison, CoreError> {
    let gap: Decimal = sub(actual, target, "computing margin gap")?.normalize();
    let status: TargetStatus = if actual >= target {
        TargetStatus::MeetsTarget
    } else {
        TargetStatus::BelowTarget
    };

    // A target of exactly 1 leaves no room for cost, so no revenue reaches it.
    let required_revenue: Option<Decimal> = if target < Decimal::ONE {
        let remaining: Decimal = sub(Decimal::ONE, target, "computing required revenue")?;
        Some(div(totals.total_cost, remaining, "computing required revenue")?.normalize())
    } else {
        None
    };

    let revenue_shortfall: Option<Decimal> = match required_revenue {
        Some(required) => Some(
            sub(
                required,
                totals.total_revenue,
                "computing revenue shortfall",
            )?
            .max(Decimal::ZERO)
            .normalize(),
        ),
        None => None,
    };

    Ok(MarginComparison {
        target,
        actual,
        gap,
        status,
        required_revenue,
        revenue_shortfall,
    })
}

/// Computes a full profitability report for a form.
///
/// This is a pure, deterministic calculation: the same form always
/// yields the same report and the form is never modified.
///
/// # Arguments
///
/// * `form` - The form to compute
///
/// # Returns
///
/// A `Report` with per-item rows, totals, the actual margin, and the
/// comparison against `form.target_profit_margin`.
///
/// # Errors
///
/// Returns an error if:
/// - The form fails validation (`CoreError::InvalidInput`)
/// - Total revenue is zero (`CoreError::UndefinedMargin`, carrying the totals)
/// - A decimal operation overflows (`CoreError::ArithmeticOverflow`)
pub fn compute(form: &Form) -> Result<Report, CoreError> {
    let totals: Totals = compute_totals(form)?;

    if totals.total_revenue.is_zero() {
        return Err(CoreError::UndefinedMargin {
            totals: Box::new(totals),
        });
    }

    let margin: Decimal =
        div(totals.profit, totals.total_revenue, "computing margin")?.normalize();
    let comparison: MarginComparison = compare_margin(&totals, margin, form.target_profit_margin)?;

    Ok(Report {
        totals,
        margin,
        comparison,
    })
}
