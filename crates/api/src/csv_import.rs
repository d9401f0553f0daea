// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV preview and validation for bulk line item import.
//!
//! Rows are parsed and checked individually so that every problem in a
//! file can be reported at once. Nothing is computed here.

use csv::StringRecord;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::str::FromStr;
use tracing::debug;

use crate::error::ApiError;
use crate::request_response::LineItemRequest;

/// Required CSV column headers (case-insensitive, normalized).
pub const REQUIRED_HEADERS: &[&str] = &["name", "cost_price", "sell_price", "quantity"];

/// A single row result from CSV preview validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRowResult {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// The item name, if present.
    pub name: Option<String>,
    /// The parsed line item (only for valid rows).
    pub item: Option<LineItemRequest>,
    /// The row status.
    pub status: CsvRowStatus,
    /// Zero or more validation errors.
    pub errors: Vec<String>,
}

/// Status of a CSV row validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvRowStatus {
    /// Row is valid and can be imported.
    Valid,
    /// Row has validation errors and cannot be imported.
    Invalid,
}

/// Result of CSV preview validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvPreviewResult {
    /// Per-row validation results.
    pub rows: Vec<CsvRowResult>,
    /// Total number of rows.
    pub total_rows: usize,
    /// Number of valid rows.
    pub valid_count: usize,
    /// Number of invalid rows.
    pub invalid_count: usize,
}

impl CsvPreviewResult {
    /// Returns `true` if every row is valid.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.invalid_count == 0
    }

    /// Consumes the preview, returning the valid rows as line items in file order.
    #[must_use]
    pub fn into_line_items(self) -> Vec<LineItemRequest> {
        self.rows.into_iter().filter_map(|row| row.item).collect()
    }
}

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Validates that all required headers are present and no header repeats.
fn validate_headers(headers: &StringRecord) -> Result<Vec<String>, ApiError> {
    let normalized: Vec<String> = headers.iter().map(normalize_header).collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut duplicates: Vec<&str> = Vec::new();
    for header in normalized.iter().filter(|h| !h.is_empty()) {
        if !seen.insert(header.as_str()) && !duplicates.contains(&header.as_str()) {
            duplicates.push(header.as_str());
        }
    }

    if !duplicates.is_empty() {
        return Err(ApiError::InvalidCsv {
            reason: format!("Duplicate headers: {}", duplicates.join(", ")),
        });
    }

    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|required| !normalized.iter().any(|h| h.as_str() == *required))
        .collect();

    if !missing.is_empty() {
        return Err(ApiError::InvalidCsv {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(normalized)
}

/// Parses a non-negative decimal field, recording any problem in `errors`.
fn parse_amount(value: Option<&str>, field_name: &str, errors: &mut Vec<String>) -> Option<Decimal> {
    let Some(raw) = value else {
        errors.push(format!("{field_name}: required field is missing or empty"));
        return None;
    };

    match Decimal::from_str(raw) {
        Ok(amount) if amount < Decimal::ZERO => {
            errors.push(format!("{field_name}: must not be negative, got {amount}"));
            None
        }
        Ok(amount) => Some(amount),
        Err(_) => {
            errors.push(format!("{field_name}: invalid number '{raw}'"));
            None
        }
    }
}

fn parse_quantity(value: Option<&str>, errors: &mut Vec<String>) -> Option<i64> {
    let Some(raw) = value else {
        errors.push(String::from("quantity: required field is missing or empty"));
        return None;
    };

    match raw.parse::<i64>() {
        Ok(quantity) if quantity < 0 => {
            errors.push(format!("quantity: must not be negative, got {quantity}"));
            None
        }
        Ok(quantity) => Some(quantity),
        Err(_) => {
            errors.push(format!("quantity: invalid whole number '{raw}'"));
            None
        }
    }
}

/// Parses one CSV row into a line item request.
///
/// Columns beyond the required ones become `additional_info` strings.
fn parse_csv_row(
    record: &StringRecord,
    headers: &[String],
) -> (Option<String>, Result<LineItemRequest, Vec<String>>) {
    let mut errors: Vec<String> = Vec::new();
    let mut fields: HashMap<&str, &str> = HashMap::new();
    let mut additional_info: Map<String, Value> = Map::new();

    for (header, value) in headers.iter().zip(record.iter()) {
        let value: &str = value.trim();
        if value.is_empty() || header.is_empty() {
            continue;
        }
        if REQUIRED_HEADERS.contains(&header.as_str()) {
            fields.insert(header.as_str(), value);
        } else {
            additional_info.insert(header.clone(), Value::String(value.to_string()));
        }
    }

    let name: Option<String> = fields.get("name").map(|s| (*s).to_string());
    if name.is_none() {
        errors.push(String::from("name: required field is missing or empty"));
    }
    let cost_price: Option<Decimal> =
        parse_amount(fields.get("cost_price").copied(), "cost_price", &mut errors);
    let sell_price: Option<Decimal> =
        parse_amount(fields.get("sell_price").copied(), "sell_price", &mut errors);
    let quantity: Option<i64> = parse_quantity(fields.get("quantity").copied(), &mut errors);

    let (Some(item_name), Some(cost_price), Some(sell_price), Some(quantity)) =
        (name.clone(), cost_price, sell_price, quantity)
    else {
        return (name, Err(errors));
    };

    let item: LineItemRequest = LineItemRequest {
        name: item_name,
        cost_price,
        sell_price,
        quantity,
        additional_info: if additional_info.is_empty() {
            None
        } else {
            Some(additional_info)
        },
    };

    (name, Ok(item))
}

/// Previews and validates CSV line item data.
///
/// # Arguments
///
/// * `reader` - Any source of CSV bytes with a header row
///
/// # Returns
///
/// * `Ok(CsvPreviewResult)` with per-row validation results
/// * `Err(ApiError)` if CSV format is invalid or cannot be parsed
///
/// # Errors
///
/// Returns `ApiError::InvalidCsv` if the header row cannot be read or a
/// required header is missing. Problems within a row never fail the
/// whole preview.
pub fn preview_line_items_csv<R: Read>(reader: R) -> Result<CsvPreviewResult, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    // Get and validate headers
    let headers: Vec<String> = validate_headers(reader.headers().map_err(|e| {
        ApiError::InvalidCsv {
            reason: format!("Failed to read CSV headers: {e}"),
        }
    })?)?;

    let mut results: Vec<CsvRowResult> = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let row_number: usize = idx + 1;

        let record: StringRecord = match result {
            Ok(rec) => rec,
            Err(e) => {
                results.push(CsvRowResult {
                    row_number,
                    name: None,
                    item: None,
                    status: CsvRowStatus::Invalid,
                    errors: vec![format!("CSV parse error: {e}")],
                });
                continue;
            }
        };

        let (name, parsed) = parse_csv_row(&record, &headers);
        let row: CsvRowResult = match parsed {
            Ok(item) => CsvRowResult {
                row_number,
                name,
                item: Some(item),
                status: CsvRowStatus::Valid,
                errors: Vec::new(),
            },
            Err(errors) => CsvRowResult {
                row_number,
                name,
                item: None,
                status: CsvRowStatus::Invalid,
                errors,
            },
        };
        results.push(row);
    }

    let total_rows: usize = results.len();
    let valid_count: usize = results
        .iter()
        .filter(|r| r.status == CsvRowStatus::Valid)
        .count();
    let invalid_count: usize = total_rows - valid_count;

    debug!(total_rows, valid_count, invalid_count, "CSV preview complete");

    Ok(CsvPreviewResult {
        rows: results,
        total_rows,
        valid_count,
        invalid_count,
    })
}
