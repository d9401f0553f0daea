// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use profit_calc_domain::AdditionalInfo;
use rust_decimal::Decimal;

/// Cost and revenue contributed by one line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBreakdown {
    /// Zero-based position of the item in the form.
    pub position: usize,
    /// The item's display name.
    pub name: String,
    /// Number of units.
    pub quantity: i64,
    /// Cost per unit.
    pub unit_cost: Decimal,
    /// Sell price per unit.
    pub unit_price: Decimal,
    /// `unit_cost × quantity`.
    pub cost: Decimal,
    /// `unit_price × quantity`.
    pub revenue: Decimal,
    /// `revenue − cost`.
    pub profit: Decimal,
    /// Metadata copied from the input item.
    pub additional_info: AdditionalInfo,
}

/// Aggregate figures of a calculation, everything except the margin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    /// Per-item rows in form order.
    pub items: Vec<ItemBreakdown>,
    /// Sum of all item costs.
    pub item_cost: Decimal,
    /// `labor_hours × labor_cost_per_hour`.
    pub labor_cost: Decimal,
    /// Fixed overheads copied from the form.
    pub fixed_overheads: Decimal,
    /// `item_cost + labor_cost + fixed_overheads`.
    pub total_cost: Decimal,
    /// Sum of all item revenue.
    pub total_revenue: Decimal,
    /// `total_revenue − total_cost`.
    pub profit: Decimal,
}

/// Whether the actual margin reaches the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetStatus {
    /// Actual margin is at or above the target.
    MeetsTarget,
    /// Actual margin is below the target.
    BelowTarget,
}

impl TargetStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MeetsTarget => "meets_target",
            Self::BelowTarget => "below_target",
        }
    }

    /// Returns `true` if the target was reached.
    #[must_use]
    pub const fn is_met(&self) -> bool {
        matches!(self, Self::MeetsTarget)
    }
}

impl std::fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Actual margin measured against the target margin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarginComparison {
    /// The requested margin (fraction).
    pub target: Decimal,
    /// The achieved margin (fraction).
    pub actual: Decimal,
    /// `actual − target`. Negative when below target.
    pub gap: Decimal,
    /// Whether the target is met.
    pub status: TargetStatus,
    /// Revenue needed at the current cost to hit the target exactly:
    /// `total_cost / (1 − target)`. `None` when the target is 1.
    pub required_revenue: Option<Decimal>,
    /// How much revenue is missing to reach `required_revenue`, never negative.
    pub revenue_shortfall: Option<Decimal>,
}

/// The full result of a profitability calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Aggregate and per-item figures.
    pub totals: Totals,
    /// `profit / total_revenue`.
    pub margin: Decimal,
    /// Margin against target.
    pub comparison: MarginComparison,
}
