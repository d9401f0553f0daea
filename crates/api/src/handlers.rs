// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use profit_calc::{CoreError, compute};
use profit_calc_domain::Form;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::error::{ApiError, translate_core_error};
use crate::request_response::{CalculationRequest, CalculationResponse};

/// Runs a profitability calculation.
///
/// # Arguments
///
/// * `request` - The calculation request
///
/// # Returns
///
/// The calculation response. A zero-revenue calculation is a successful
/// response with `margin_status` set to `undefined`.
///
/// # Errors
///
/// Returns an error if:
/// - Any numeric field is negative
/// - The target margin is not a fraction between 0 and 1
/// - An amount is too large to compute with
pub fn calculate(request: CalculationRequest) -> Result<CalculationResponse, ApiError> {
    let form: Form = request.into_form();
    let target: Decimal = form.target_profit_margin;

    debug!(
        line_items = form.line_items.len(),
        target_profit_margin = %target,
        "Computing profitability"
    );

    match compute(&form) {
        Ok(report) => {
            info!(
                total_cost = %report.totals.total_cost,
                total_revenue = %report.totals.total_revenue,
                margin = %report.margin,
                status = %report.comparison.status,
                "Calculation complete"
            );
            Ok(CalculationResponse::from_report(&report))
        }
        Err(CoreError::UndefinedMargin { totals }) => {
            info!(
                total_cost = %totals.total_cost,
                "Calculation complete with undefined margin (no revenue)"
            );
            Ok(CalculationResponse::undefined_margin(&totals, target))
        }
        Err(err) => {
            warn!(error = %err, "Calculation rejected");
            Err(translate_core_error(err))
        }
    }
}
