//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, limits)
//! - Evaluation configuration and size validation
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{AlertsArgs, CheckArgs, Cli, Command, EvaluateArgs, HistoryArgs};
pub use constants::*;
pub use types::{parse_chunk_size, parse_dataset_size, EvaluationConfig, LogFormat, LogLevel};
