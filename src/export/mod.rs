//! Export functionality for evaluation output.
//!
//! This module provides functions to export evaluation results into
//! different formats:
//! - CSV: one flattened row per sample, for spreadsheets
//! - JSON: the whole report, for programmatic access

mod csv;
mod json;
mod types;

pub use self::csv::{export_csv, write_csv};
pub use json::export_json;
pub use types::{ExportFormat, ExportOptions};

use anyhow::Result;

use crate::report::Report;

/// Exports a report in the format selected by `options`.
pub fn export_report(report: &Report, options: &ExportOptions) -> Result<usize> {
    match options.format {
        ExportFormat::Csv => export_csv(&report.details, options.output.as_deref()),
        ExportFormat::Json => export_json(report, options.output.as_deref()),
    }
}
