// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque metadata attached to a line item.
///
/// The calculator never reads it. It is carried unchanged from the
/// input item to the matching row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdditionalInfo(Map<String, Value>);

impl AdditionalInfo {
    /// Creates empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Inserts a value, returning the previous value for the key if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if no metadata is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for AdditionalInfo {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A single priced, quantified product or service entry.
///
/// No rule ties `sell_price` to `cost_price`: a loss-making item is
/// valid input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name. Not used in computation.
    pub name: String,
    /// Cost per unit.
    pub cost_price: Decimal,
    /// Sell price per unit.
    pub sell_price: Decimal,
    /// Number of units. Signed so that negative input can be rejected
    /// by validation instead of failing to parse.
    pub quantity: i64,
    /// Pass-through metadata.
    #[serde(default)]
    pub additional_info: AdditionalInfo,
}

impl Item {
    /// Creates a new line item with no additional metadata.
    ///
    /// # Arguments
    ///
    /// * `name` - The display name
    /// * `cost_price` - Cost per unit
    /// * `sell_price` - Sell price per unit
    /// * `quantity` - Number of units
    #[must_use]
    pub fn new(name: &str, cost_price: Decimal, sell_price: Decimal, quantity: i64) -> Self {
        Self {
            name: name.to_string(),
            cost_price,
            sell_price,
            quantity,
            additional_info: AdditionalInfo::new(),
        }
    }

    /// Attaches metadata to this item.
    #[must_use]
    pub fn with_additional_info(mut self, additional_info: AdditionalInfo) -> Self {
        self.additional_info = additional_info;
        self
    }
}

/// A single profitability calculation request.
///
/// `target_profit_margin` is a fraction: `0.3` means 30%.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    /// Line items, in the order they should appear in the report.
    #[serde(default)]
    pub line_items: Vec<Item>,
    /// Hours of labor.
    pub labor_hours: Decimal,
    /// Cost of one hour of labor.
    pub labor_cost_per_hour: Decimal,
    /// One-time costs independent of quantity and labor.
    pub fixed_overheads: Decimal,
    /// Desired margin as a fraction between 0 and 1.
    pub target_profit_margin: Decimal,
}

impl Form {
    /// Creates a form with no line items.
    ///
    /// # Arguments
    ///
    /// * `labor_hours` - Hours of labor
    /// * `labor_cost_per_hour` - Labor rate
    /// * `fixed_overheads` - One-time overheads
    /// * `target_profit_margin` - Desired margin as a fraction
    #[must_use]
    pub const fn new(
        labor_hours: Decimal,
        labor_cost_per_hour: Decimal,
        fixed_overheads: Decimal,
        target_profit_margin: Decimal,
    ) -> Self {
        Self {
            line_items: Vec::new(),
            labor_hours,
            labor_cost_per_hour,
            fixed_overheads,
            target_profit_margin,
        }
    }

    /// Appends a line item, returning the form.
    #[must_use]
    pub fn with_line_item(mut self, item: Item) -> Self {
        self.line_items.push(item);
        self
    }
}
