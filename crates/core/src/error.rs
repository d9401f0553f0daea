// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use profit_calc_domain::DomainError;

use crate::report::Totals;

/// Errors that can occur while computing a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The form failed validation. Nothing was computed.
    InvalidInput(DomainError),
    /// Total revenue is zero, so the margin has no value.
    ///
    /// The aggregate figures are still returned so callers can show them.
    UndefinedMargin {
        /// Everything that could be computed without a margin.
        totals: Box<Totals>,
    },
    /// A decimal operation exceeded the representable range.
    ArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "Invalid input: {err}"),
            Self::UndefinedMargin { .. } => {
                write!(f, "Margin is undefined: total revenue is zero")
            }
            Self::ArithmeticOverflow { operation } => {
                write!(f, "Arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::UndefinedMargin { .. } | Self::ArithmeticOverflow { .. } => None,
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::InvalidInput(err)
    }
}
