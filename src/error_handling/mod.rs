//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for every failure boundary
//! - Per-sample failure categorization
//! - Processing statistics tracking (failure counts by kind)
//!
//! Failures are split by blast radius:
//! - **Per-sample**: `InvalidUrlError`, isolated inside a batch
//! - **Per-run**: `DatasetSizeError`, rejected before processing starts
//! - **Per-metric**: `UndefinedMetricError`, reported instead of a number

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_url_error, update_failure_stats};
pub use stats::ProcessingStats;
pub use types::{
    AlertSourceError, DatasetSizeError, FailureKind, HistoryError, InitializationError,
    InvalidUrlError, UndefinedMetricError,
};
