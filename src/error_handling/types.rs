//! Error type definitions.
//!
//! This module defines all error types and failure categories used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// The input string is not a well-formed absolute URL.
///
/// Raised synchronously by feature extraction. Never retried; batch evaluation
/// records it against the offending sample and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidUrlError {
    /// The URL parser rejected the string.
    #[error("Failed to parse URL '{url}': {source}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL parsed but has no (or an empty) host.
    #[error("URL '{url}' has no host component")]
    MissingHost { url: String },
}

/// A report ratio whose denominator is zero.
///
/// Kept distinct from a real 0% so callers can choose how to display it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{metric} is undefined (zero denominator)")]
pub struct UndefinedMetricError {
    /// Name of the metric, e.g. `"precision"`.
    pub metric: &'static str,
}

/// Dataset size or chunk size rejected before any processing starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetSizeError {
    /// A negative count was requested.
    #[error("{field} must be a non-negative integer, got {value}")]
    Negative { field: &'static str, value: i64 },

    /// The value could not be read as an integer.
    #[error("{field} must be an integer, got '{value}'")]
    NotAnInteger { field: &'static str, value: String },

    /// Chunks must hold at least one sample.
    #[error("chunk_size must be greater than 0")]
    ZeroChunkSize,

    /// The value exceeds the supported maximum.
    #[error("{field} of {value} exceeds the maximum of {max}")]
    TooLarge {
        field: &'static str,
        value: usize,
        max: usize,
    },
}

/// Failures reading alert records from the external alert source.
#[derive(Error, Debug)]
pub enum AlertSourceError {
    /// The alert file could not be read.
    #[error("Failed to read alerts from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading did not finish within the allotted time.
    #[error("Timed out after {seconds}s reading alerts from {path}")]
    Timeout { path: PathBuf, seconds: u64 },

    /// The payload is not a JSON array of alert records.
    #[error("Malformed alert data in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures loading or saving the URL check history.
#[derive(Error, Debug)]
pub enum HistoryError {
    /// The history file could not be read or written.
    #[error("History file I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The history file exists but does not hold valid history JSON.
    #[error("Malformed history file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Categories of per-sample failures during batch evaluation.
///
/// Each failed sample is counted under exactly one kind so the end-of-run
/// statistics can show what went wrong without listing every URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    RelativeUrl,       // No scheme, e.g. "example.com/path"
    EmptyHost,         // Scheme present but host empty
    InvalidPort,       // Port out of range or non-numeric
    InvalidIpAddress,  // Host looks like an IP literal but is not one
    InvalidDomain,     // Host contains forbidden characters
    MissingHost,       // Parsed, but the scheme has no host (mailto:, data:)
    OtherParseError,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::RelativeUrl => "Relative URL (missing scheme)",
            FailureKind::EmptyHost => "Empty host",
            FailureKind::InvalidPort => "Invalid port",
            FailureKind::InvalidIpAddress => "Invalid IP address",
            FailureKind::InvalidDomain => "Invalid domain character",
            FailureKind::MissingHost => "URL has no host",
            FailureKind::OtherParseError => "Other parse error",
        }
    }
}
