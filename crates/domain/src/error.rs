// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;

use crate::validation::TARGET_MARGIN_FIELD;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A currency amount, hour count, or rate is negative.
    NegativeAmount {
        /// Path of the offending field (e.g. `line_items[0].cost_price`).
        field: String,
        /// The rejected value.
        value: Decimal,
    },
    /// A line item quantity is negative.
    NegativeQuantity {
        /// Path of the offending field (e.g. `line_items[0].quantity`).
        field: String,
        /// The rejected quantity.
        quantity: i64,
    },
    /// The target profit margin is not a fraction between 0 and 1.
    InvalidTargetMargin {
        /// The rejected value.
        value: Decimal,
    },
}

impl DomainError {
    /// Returns the path of the field that failed validation.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::NegativeAmount { field, .. } | Self::NegativeQuantity { field, .. } => {
                field.as_str()
            }
            Self::InvalidTargetMargin { .. } => TARGET_MARGIN_FIELD,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount { field, value } => {
                write!(f, "Invalid {field}: must not be negative, got {value}")
            }
            Self::NegativeQuantity { field, quantity } => {
                write!(f, "Invalid {field}: must not be negative, got {quantity}")
            }
            Self::InvalidTargetMargin { value } => {
                write!(
                    f,
                    "Invalid {TARGET_MARGIN_FIELD}: {value}. Must be a fraction between 0 and 1"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
