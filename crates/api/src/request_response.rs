// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Monetary values deserialize from JSON numbers or strings and always
//! serialize as strings so no precision is lost on the wire.

use profit_calc::{ItemBreakdown, MarginComparison, Report, TargetStatus, Totals};
use profit_calc_domain::{AdditionalInfo, Form, Item};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A line item as submitted by a client.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemRequest {
    /// The item name.
    pub name: String,
    /// Cost per unit.
    pub cost_price: Decimal,
    /// Sell price per unit.
    pub sell_price: Decimal,
    /// Number of units.
    pub quantity: i64,
    /// Free-form metadata echoed back in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<Map<String, Value>>,
}

impl LineItemRequest {
    /// Converts this request into a domain item.
    #[must_use]
    pub fn into_item(self) -> Item {
        let additional_info: AdditionalInfo =
            self.additional_info.map(AdditionalInfo::from).unwrap_or_default();
        Item::new(&self.name, self.cost_price, self.sell_price, self.quantity)
            .with_additional_info(additional_info)
    }
}

/// API request to run one profitability calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Line items in display order. May be empty.
    #[serde(default)]
    pub line_items: Vec<LineItemRequest>,
    /// Hours of labor.
    pub labor_hours: Decimal,
    /// Labor rate per hour.
    pub labor_cost_per_hour: Decimal,
    /// One-time overheads.
    pub fixed_overheads: Decimal,
    /// Desired margin as a fraction (`0.3` is 30%).
    pub target_profit_margin: Decimal,
}

impl CalculationRequest {
    /// Converts this request into a domain form. No validation happens here.
    #[must_use]
    pub fn into_form(self) -> Form {
        let mut form: Form = Form::new(
            self.labor_hours,
            self.labor_cost_per_hour,
            self.fixed_overheads,
            self.target_profit_margin,
        );
        form.line_items = self
            .line_items
            .into_iter()
            .map(LineItemRequest::into_item)
            .collect();
        form
    }
}

/// Per-item figures in a calculation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemResponse {
    /// Zero-based position in the request.
    pub position: usize,
    /// The item name.
    pub name: String,
    /// Number of units.
    pub quantity: i64,
    /// Cost per unit.
    pub unit_cost: Decimal,
    /// Sell price per unit.
    pub unit_price: Decimal,
    /// Total cost of this item.
    pub cost: Decimal,
    /// Total revenue of this item.
    pub revenue: Decimal,
    /// `revenue - cost`.
    pub profit: Decimal,
    /// Metadata from the request, unchanged.
    #[serde(default, skip_serializing_if = "AdditionalInfo::is_empty")]
    pub additional_info: AdditionalInfo,
}

impl From<&ItemBreakdown> for LineItemResponse {
    fn from(row: &ItemBreakdown) -> Self {
        Self {
            position: row.position,
            name: row.name.clone(),
            quantity: row.quantity,
            unit_cost: row.unit_cost,
            unit_price: row.unit_price,
            cost: row.cost,
            revenue: row.revenue,
            profit: row.profit,
            additional_info: row.additional_info.clone(),
        }
    }
}

/// Outcome of the margin comparison as exposed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginStatus {
    /// Margin is at or above the target.
    MeetsTarget,
    /// Margin is below the target.
    BelowTarget,
    /// Total revenue is zero, so no margin exists.
    Undefined,
}

impl MarginStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MeetsTarget => "meets_target",
            Self::BelowTarget => "below_target",
            Self::Undefined => "undefined",
        }
    }
}

impl From<TargetStatus> for MarginStatus {
    fn from(status: TargetStatus) -> Self {
        match status {
            TargetStatus::MeetsTarget => Self::MeetsTarget,
            TargetStatus::BelowTarget => Self::BelowTarget,
        }
    }
}

impl std::fmt::Display for MarginStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// API response for a completed calculation.
///
/// When total revenue is zero, `margin`, `margin_gap`, and the revenue
/// figures are `null` and `margin_status` is `undefined`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Per-item figures in request order.
    pub line_items: Vec<LineItemResponse>,
    /// Sum of item costs.
    pub item_cost: Decimal,
    /// Labor hours times labor rate.
    pub labor_cost: Decimal,
    /// Fixed overheads from the request.
    pub fixed_overheads: Decimal,
    /// Item cost plus labor cost plus fixed overheads.
    pub total_cost: Decimal,
    /// Sum of item revenue.
    pub total_revenue: Decimal,
    /// Revenue minus total cost.
    pub profit: Decimal,
    /// Profit divided by revenue, as a fraction.
    pub margin: Option<Decimal>,
    /// The requested margin.
    pub target_profit_margin: Decimal,
    /// Margin minus target.
    pub margin_gap: Option<Decimal>,
    /// Whether the target was met.
    pub margin_status: MarginStatus,
    /// Revenue needed at the current cost to reach the target.
    pub required_revenue: Option<Decimal>,
    /// Revenue still missing to reach the target.
    pub revenue_shortfall: Option<Decimal>,
}

impl CalculationResponse {
    fn with_totals(totals: &Totals, target_profit_margin: Decimal) -> Self {
        Self {
            line_items: totals.items.iter().map(LineItemResponse::from).collect(),
            item_cost: totals.item_cost,
            labor_cost: totals.labor_cost,
            fixed_overheads: totals.fixed_overheads,
            total_cost: totals.total_cost,
            total_revenue: totals.total_revenue,
            profit: totals.profit,
            margin: None,
            target_profit_margin,
            margin_gap: None,
            margin_status: MarginStatus::Undefined,
            required_revenue: None,
            revenue_shortfall: None,
        }
    }

    /// Builds a response from a full report.
    #[must_use]
    pub fn from_report(report: &Report) -> Self {
        let comparison: &MarginComparison = &report.comparison;
        Self {
            margin: Some(report.margin),
            margin_gap: Some(comparison.gap),
            margin_status: MarginStatus::from(comparison.status),
            required_revenue: comparison.required_revenue,
            revenue_shortfall: comparison.revenue_shortfall,
            ..Self::with_totals(&report.totals, comparison.target)
        }
    }

    /// Builds a response for a calculation whose margin is undefined.
    #[must_use]
    pub fn undefined_margin(totals: &Totals, target_profit_margin: Decimal) -> Self {
        Self::with_totals(totals, target_profit_margin)
    }
}
