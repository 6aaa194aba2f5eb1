//! Configuration types.
//!
//! This module defines enums and structs used for configuration and
//! command-line argument parsing.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_CHUNK_DELAY_MS, DEFAULT_CHUNK_SIZE, DEFAULT_DATASET_SIZE, MAX_DATASET_SIZE,
};
use crate::error_handling::DatasetSizeError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Configuration for one evaluation run (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use url_risk::EvaluationConfig;
///
/// let config = EvaluationConfig {
///     dataset_size: 1_000,
///     chunk_size: 50,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct EvaluationConfig {
    /// Number of synthetic samples to generate
    pub dataset_size: usize,

    /// Samples scored per chunk
    pub chunk_size: usize,

    /// Pause between chunks in milliseconds (0 only yields)
    pub chunk_delay_ms: u64,

    /// Write per-sample results as CSV to this path
    pub csv_output: Option<PathBuf>,

    /// Write the report as JSON to this path
    pub json_output: Option<PathBuf>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            dataset_size: DEFAULT_DATASET_SIZE,
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_delay_ms: DEFAULT_CHUNK_DELAY_MS,
            csv_output: None,
            json_output: None,
        }
    }
}

impl EvaluationConfig {
    /// Rejects sizes that can never produce a run.
    pub fn validate(&self) -> Result<(), DatasetSizeError> {
        if self.chunk_size == 0 {
            return Err(DatasetSizeError::ZeroChunkSize);
        }
        if self.dataset_size > MAX_DATASET_SIZE {
            return Err(DatasetSizeError::TooLarge {
                field: "dataset_size",
                value: self.dataset_size,
                max: MAX_DATASET_SIZE,
            });
        }
        Ok(())
    }
}

/// Parses a dataset size from user input.
///
/// Used as a clap value parser so negative and non-integer counts are
/// rejected with a `DatasetSizeError` before anything runs.
pub fn parse_dataset_size(raw: &str) -> Result<usize, DatasetSizeError> {
    parse_count("count", raw)
}

/// Parses a chunk size from user input; zero is rejected.
pub fn parse_chunk_size(raw: &str) -> Result<usize, DatasetSizeError> {
    match parse_count("chunk_size", raw)? {
        0 => Err(DatasetSizeError::ZeroChunkSize),
        n => Ok(n),
    }
}

fn parse_count(field: &'static str, raw: &str) -> Result<usize, DatasetSizeError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| DatasetSizeError::NotAnInteger {
            field,
            value: trimmed.to_string(),
        })?;
    if value < 0 {
        return Err(DatasetSizeError::Negative { field, value });
    }
    let value = usize::try_from(value).map_err(|_| DatasetSizeError::TooLarge {
        field,
        value: usize::MAX,
        max: MAX_DATASET_SIZE,
    })?;
    if value > MAX_DATASET_SIZE {
        return Err(DatasetSizeError::TooLarge {
            field,
            value,
            max: MAX_DATASET_SIZE,
        });
    }
    Ok(value)
}
