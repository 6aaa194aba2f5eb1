//! Export types and options.

use std::path::PathBuf;

/// Export format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// CSV format (one flattened row per evaluated sample)
    Csv,
    /// JSON format (the whole report, nested)
    Json,
}

/// Options for exporting evaluation output.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Output file path (or stdout if None)
    pub output: Option<PathBuf>,
    /// Export format
    pub format: ExportFormat,
}
