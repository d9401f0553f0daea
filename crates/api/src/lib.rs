// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary layer for the profitability calculator.
//!
//! Translates wire DTOs into domain forms, runs the calculation, and
//! translates reports and errors back into the API contract. Domain and
//! core errors never cross this boundary untranslated.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod csv_import;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use csv_import::{
    CsvPreviewResult, CsvRowResult, CsvRowStatus, REQUIRED_HEADERS, preview_line_items_csv,
};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::calculate;
pub use request_response::{
    CalculationRequest, CalculationResponse, LineItemRequest, LineItemResponse, MarginStatus,
};
