// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Profitability calculation core.
//!
//! Turns a validated [`Form`](profit_calc_domain::Form) into a [`Report`]:
//! per-item and aggregate cost and revenue, profit, actual margin, and a
//! comparison against the target margin. Every function here is pure.

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

mod compute;
mod error;
mod report;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use compute::{compare_margin, compute, compute_totals};
pub use error::CoreError;
pub use report::{ItemBreakdown, MarginComparison, Report, TargetStatus, Totals};
