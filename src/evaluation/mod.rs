//! Batch evaluation of the risk scorer.
//!
//! This module provides:
//! - `BatchEvaluator`, an iterator that scores a dataset one chunk at a time
//! - `evaluate`, a convenience that drains the evaluator
//! - `EvaluatedSample` and `BatchProgress` records

mod batch;
mod types;

pub use batch::{evaluate, BatchEvaluator};
pub use types::{BatchProgress, EvaluatedSample};
