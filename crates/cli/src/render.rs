// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::ValueEnum;
use profit_calc_api::{CalculationResponse, LineItemResponse, MarginStatus};
use rust_decimal::Decimal;
use std::fmt::Write;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table and summary for terminals.
    Text,
    /// The calculation response as pretty-printed JSON.
    Json,
}

fn money(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

/// Formats a fraction as a percentage with two decimals.
fn percent(fraction: Decimal) -> String {
    fraction.checked_mul(Decimal::ONE_HUNDRED).map_or_else(
        || format!("{fraction} (fraction)"),
        |value| format!("{:.2}%", value.round_dp(2)),
    )
}

fn item_row(item: &LineItemResponse) -> String {
    format!(
        "{:<24} {:>8} {:>12} {:>12} {:>12} {:>12} {:>12}",
        item.name,
        item.quantity,
        money(item.unit_cost),
        money(item.unit_price),
        money(item.cost),
        money(item.revenue),
        money(item.profit),
    )
}

fn status_line(response: &CalculationResponse) -> String {
    match (response.margin_status, response.margin_gap) {
        (MarginStatus::MeetsTarget, _) => String::from("meets target"),
        (MarginStatus::BelowTarget, Some(gap)) => {
            format!("below target by {}", percent(gap.abs()))
        }
        (MarginStatus::BelowTarget, None) => String::from("below target"),
        (MarginStatus::Undefined, _) => String::from("margin undefined: no revenue"),
    }
}

/// Writes the plain-text report for a response into `out`.
fn write_report<W: Write>(out: &mut W, response: &CalculationResponse) -> std::fmt::Result {
    writeln!(
        out,
        "{:<24} {:>8} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "ITEM", "QTY", "UNIT COST", "UNIT PRICE", "COST", "REVENUE", "PROFIT"
    )?;
    if response.line_items.is_empty() {
        writeln!(out, "(no line items)")?;
    }
    for item in &response.line_items {
        writeln!(out, "{}", item_row(item))?;
    }

    writeln!(out)?;
    let summary: [(&str, Decimal); 6] = [
        ("Item cost", response.item_cost),
        ("Labor cost", response.labor_cost),
        ("Fixed overheads", response.fixed_overheads),
        ("Total cost", response.total_cost),
        ("Total revenue", response.total_revenue),
        ("Profit", response.profit),
    ];
    for (label, value) in summary {
        writeln!(out, "{:<18}{:>14}", format!("{label}:"), money(value))?;
    }

    let margin: String = response
        .margin
        .map_or_else(|| String::from("undefined"), percent);
    writeln!(
        out,
        "{:<18}{:>14}  (target {})",
        "Margin:",
        margin,
        percent(response.target_profit_margin)
    )?;

    if let (Some(required), Some(shortfall)) =
        (response.required_revenue, response.revenue_shortfall)
        && !shortfall.is_zero()
    {
        writeln!(
            out,
            "{:<18}{:>14}  (short by {})",
            "Revenue needed:",
            money(required),
            money(shortfall)
        )?;
    }

    writeln!(out, "Status: {}", status_line(response))
}

/// Renders a calculation response as a plain-text report.
///
/// # Errors
///
/// Returns an error if a formatting implementation fails.
pub fn render_text(response: &CalculationResponse) -> Result<String, std::fmt::Error> {
    let mut out: String = String::new();
    write_report(&mut out, response)?;
    Ok(out)
}

/// Renders a response as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the response cannot be serialized.
pub fn render_json(response: &CalculationResponse) -> Result<String, serde_json::Error> {
    let mut out: String = serde_json::to_string_pretty(response)?;
    out.push('\n');
    Ok(out)
}
