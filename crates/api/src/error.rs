// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use profit_calc::CoreError;
use profit_calc_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },

    /// A CSV file could not be read as a whole.
    #[error("Invalid CSV format: {reason}")]
    InvalidCsv {
        /// Why the file was rejected.
        reason: String,
    },

    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the offending field for `InvalidInput`, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field.as_str()),
            Self::InvalidCsv { .. } | Self::Internal { .. } => None,
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::NegativeAmount { field, value } => ApiError::InvalidInput {
            field,
            message: format!("must not be negative, got {value}"),
        },
        DomainError::NegativeQuantity { field, quantity } => ApiError::InvalidInput {
            field,
            message: format!("must not be negative, got {quantity}"),
        },
        err @ DomainError::InvalidTargetMargin { .. } => ApiError::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// `UndefinedMargin` is normally answered with an undefined-margin
/// response by [`calculate`](crate::calculate); it only reaches this
/// function when a caller insists on treating it as a failure.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::InvalidInput(domain_err) => translate_domain_error(domain_err),
        CoreError::UndefinedMargin { .. } => ApiError::InvalidInput {
            field: String::from("line_items"),
            message: String::from("total revenue is zero, so the margin is undefined"),
        },
        CoreError::ArithmeticOverflow { operation } => ApiError::Internal {
            message: format!("Arithmetic overflow while {operation}"),
        },
    }
}
