//! Command-line interface definition.
//!
//! The binary is a thin wrapper around the library; this module only describes
//! the arguments and converts them into library configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    ALERT_SOURCE_TIMEOUT, DEFAULT_CHUNK_DELAY_MS, DEFAULT_CHUNK_SIZE, DEFAULT_DATASET_SIZE,
    DEFAULT_HISTORY_PATH,
};
use crate::config::types::{
    parse_chunk_size, parse_dataset_size, EvaluationConfig, LogFormat, LogLevel,
};

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Score a single URL
/// url_risk check http://bank-secure-login123.tk
///
/// # Evaluate the scorer on 5,000 synthetic URLs, 250 per chunk
/// url_risk evaluate --count 5000 --chunk-size 250 --csv results.csv
///
/// # Show recent checks
/// url_risk history
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "url_risk",
    version,
    about = "Scores URLs for phishing risk and evaluates the scorer on synthetic data."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// History file used by `check` and `history`
    #[arg(long, value_parser, default_value = DEFAULT_HISTORY_PATH, global = true)]
    pub history_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score one or more URLs
    Check(CheckArgs),
    /// Generate a synthetic dataset and evaluate the scorer against it
    Evaluate(EvaluateArgs),
    /// Show or clear recent URL checks
    History(HistoryArgs),
    /// Load alert records from a JSON file and list them
    Alerts(AlertsArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Absolute URLs to score (scheme and host required)
    #[arg(required = true, num_args = 1..)]
    pub urls: Vec<String>,

    /// Do not record the checks in the history file
    #[arg(long)]
    pub no_history: bool,

    /// Print per-feature contributions for each URL
    #[arg(long)]
    pub explain: bool,
}

#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Number of synthetic samples (30% malicious, floor-biased)
    #[arg(long, value_parser = parse_dataset_size, allow_hyphen_values = true, default_value_t = DEFAULT_DATASET_SIZE)]
    pub count: usize,

    /// Samples scored per chunk
    #[arg(long, value_parser = parse_chunk_size, allow_hyphen_values = true, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Pause between chunks in milliseconds
    #[arg(long, default_value_t = DEFAULT_CHUNK_DELAY_MS)]
    pub chunk_delay_ms: u64,

    /// Write per-sample results to this CSV file
    #[arg(long, value_parser)]
    pub csv: Option<PathBuf>,

    /// Write the report to this JSON file
    #[arg(long, value_parser)]
    pub json: Option<PathBuf>,
}

impl From<EvaluateArgs> for EvaluationConfig {
    fn from(args: EvaluateArgs) -> Self {
        Self {
            dataset_size: args.count,
            chunk_size: args.chunk_size,
            chunk_delay_ms: args.chunk_delay_ms,
            csv_output: args.csv,
            json_output: args.json,
        }
    }
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Remove all recorded checks
    #[arg(long)]
    pub clear: bool,
}

#[derive(Debug, Args)]
pub struct AlertsArgs {
    /// JSON file holding an array of alert records
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Only show alerts of this type ("all" shows everything)
    #[arg(long = "type", default_value = "all")]
    pub alert_type: String,

    /// Give up reading the alert source after this many seconds
    #[arg(long, default_value_t = ALERT_SOURCE_TIMEOUT.as_secs())]
    pub timeout_seconds: u64,
}
