//! JSON export functionality.
//!
//! Writes the full report (summary, confusion matrix and per-sample details)
//! as pretty-printed JSON. Undefined metrics serialize as `null`.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use crate::report::Report;

/// Exports a report to JSON.
///
/// # Arguments
///
/// * `report` - The report to write
/// * `output` - Output file path (or stdout if None)
///
/// # Returns
///
/// Returns the number of detail records exported, or an error if export fails.
pub fn export_json(report: &Report, output: Option<&Path>) -> Result<usize> {
    let mut writer: Box<dyn Write> = if let Some(output_path) = output {
        let file = std::fs::File::create(output_path).context(format!(
            "Failed to create output file: {}",
            output_path.display()
        ))?;
        Box::new(io::BufWriter::new(file))
    } else {
        Box::new(io::stdout())
    };

    serde_json::to_writer_pretty(&mut writer, report).context("Failed to serialize report")?;
    writeln!(writer).context("Failed to write report")?;
    writer.flush().context("Failed to flush report output")?;
    Ok(report.details.len())
}
