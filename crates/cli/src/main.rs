// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod logging;
mod render;

use clap::Parser;
use profit_calc_api::{
    ApiError, CalculationRequest, CalculationResponse, CsvPreviewResult, CsvRowResult,
    LineItemRequest, calculate, preview_line_items_csv,
};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::logging::LogFormat;
use crate::render::{OutputFormat, render_json, render_text};

/// Profit Calc - profitability calculator for quotes and jobs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON calculation request. Use `-` or omit to read stdin.
    #[arg(short, long)]
    form: Option<PathBuf>,

    /// CSV file of line items appended after the request's own items.
    #[arg(long)]
    items_csv: Option<PathBuf>,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

/// Errors reported by the command line front end.
#[derive(Debug, Error)]
enum CliError {
    /// An input or output stream failed.
    #[error("Failed to access {source_name}: {source}")]
    Io {
        /// The file path or stream name.
        source_name: String,
        /// The underlying error.
        source: std::io::Error,
    },

    /// The request body is not a valid calculation request.
    #[error("Invalid calculation request in {source_name}: {source}")]
    Json {
        /// The file path or stream name.
        source_name: String,
        /// The underlying error.
        source: serde_json::Error,
    },

    /// The calculation or CSV import was rejected.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The CSV file contains rows that cannot be imported.
    #[error("{count} invalid row(s) in {source_name}:\n{details}")]
    InvalidCsvRows {
        /// The CSV file path.
        source_name: String,
        /// Number of invalid rows.
        count: usize,
        /// One line per invalid row.
        details: String,
    },

    /// The report could not be serialized.
    #[error("Failed to render report: {0}")]
    Render(#[source] serde_json::Error),

    /// The text report could not be formatted.
    #[error("Failed to render report: {0}")]
    RenderText(#[source] std::fmt::Error),
}

fn display_name(path: Option<&Path>) -> String {
    match path {
        Some(path) if path != Path::new("-") => path.display().to_string(),
        _ => String::from("stdin"),
    }
}

/// Parses a calculation request from any reader.
fn read_request<R: Read>(mut reader: R, source_name: &str) -> Result<CalculationRequest, CliError> {
    let mut body: String = String::new();
    reader
        .read_to_string(&mut body)
        .map_err(|source| CliError::Io {
            source_name: source_name.to_string(),
            source,
        })?;

    serde_json::from_str(&body).map_err(|source| CliError::Json {
        source_name: source_name.to_string(),
        source,
    })
}

fn describe_invalid_row(row: &CsvRowResult) -> String {
    let name: &str = row.name.as_deref().unwrap_or("<unnamed>");
    format!("  row {} ({name}): {}", row.row_number, row.errors.join("; "))
}

/// Loads line items from CSV, failing if any row is invalid.
fn read_csv_items<R: Read>(reader: R, source_name: &str) -> Result<Vec<LineItemRequest>, CliError> {
    let preview: CsvPreviewResult = preview_line_items_csv(reader)?;

    if !preview.is_clean() {
        let details: Vec<String> = preview
            .rows
            .iter()
            .filter(|row| !row.errors.is_empty())
            .map(describe_invalid_row)
            .collect();
        return Err(CliError::InvalidCsvRows {
            source_name: source_name.to_string(),
            count: preview.invalid_count,
            details: details.join("\n"),
        });
    }

    info!(rows = preview.valid_count, source = source_name, "Imported line items from CSV");
    Ok(preview.into_line_items())
}

/// Appends CSV line items after the request's own items, keeping file order.
fn append_csv_items<R: Read>(
    request: &mut CalculationRequest,
    reader: R,
    source_name: &str,
) -> Result<(), CliError> {
    let items: Vec<LineItemRequest> = read_csv_items(reader, source_name)?;
    request.line_items.extend(items);
    Ok(())
}

fn open_file(path: &Path) -> Result<File, CliError> {
    File::open(path).map_err(|source| CliError::Io {
        source_name: path.display().to_string(),
        source,
    })
}

fn run(args: &Args) -> Result<String, CliError> {
    let form_name: String = display_name(args.form.as_deref());
    debug!(source = %form_name, "Reading calculation request");

    let mut request: CalculationRequest = match args.form.as_deref() {
        Some(path) if path != Path::new("-") => read_request(open_file(path)?, &form_name)?,
        _ => read_request(std::io::stdin().lock(), &form_name)?,
    };

    if let Some(path) = &args.items_csv {
        let csv_name: String = path.display().to_string();
        append_csv_items(&mut request, open_file(path)?, &csv_name)?;
    }

    let response: CalculationResponse = calculate(request)?;

    match args.format {
        OutputFormat::Text => render_text(&response).map_err(CliError::RenderText),
        OutputFormat::Json => render_json(&response).map_err(CliError::Render),
    }
}

fn main() -> ExitCode {
    // Parse command-line arguments
    let args: Args = Args::parse();

    logging::init(&args.log_level, args.log_format);

    let output: String = match run(&args) {
        Ok(output) => output,
        Err(err) => {
            error!(error = %err, "Calculation failed");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout: std::io::StdoutLock<'static> = std::io::stdout().lock();
    if let Err(err) = stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
    {
        eprintln!("error: failed to write report: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
