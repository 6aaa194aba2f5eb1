//! Main application modules.
//!
//! This module provides utilities for input URL hygiene, progress logging,
//! interrupt handling, and statistics printing used by the main application.

pub mod logging;
pub mod shutdown;
pub mod statistics;
pub mod url;

// Re-export public API
pub use logging::{log_progress, should_log};
pub use shutdown::spawn_interrupt_handler;
pub use statistics::{print_failure_statistics, print_report_summary};
pub use url::normalize_input_url;
