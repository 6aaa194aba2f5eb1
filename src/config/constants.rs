//! Configuration constants.
//!
//! This module defines the defaults and limits used throughout the application.

use std::time::Duration;

/// Default number of synthetic samples generated for an evaluation run.
pub const DEFAULT_DATASET_SIZE: usize = 12_000;
/// Default number of samples scored per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 100;
/// Default pause between chunks in milliseconds.
/// Gives a host event loop room to refresh between units of work.
pub const DEFAULT_CHUNK_DELAY_MS: u64 = 10;
/// Upper bound on the synthetic dataset size
/// All samples and results are held in memory for the report
pub const MAX_DATASET_SIZE: usize = 10_000_000;

/// Log cumulative progress every N chunks (the final chunk is always logged).
pub const LOGGING_INTERVAL: usize = 5;

/// Share of a generated dataset that is malicious, in percent (floor-biased).
pub const MALICIOUS_SHARE_PERCENT: usize = 30;

/// Maximum URL length accepted from user input (2048 characters).
/// This matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Number of recent checks kept in the history.
pub const HISTORY_CAPACITY: usize = 10;
/// Default location of the history file.
pub const DEFAULT_HISTORY_PATH: &str = "./url_risk_history.json";

/// Default timeout for reading alert records from the external source.
pub const ALERT_SOURCE_TIMEOUT: Duration = Duration::from_secs(10);
