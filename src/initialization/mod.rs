//! Application initialization.
//!
//! This module sets up process-wide resources that must exist before any
//! evaluation starts. Currently that is the logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
