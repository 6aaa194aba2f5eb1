//! Processing statistics tracking.
//!
//! This module provides thread-safe counters for per-sample failures during
//! batch evaluation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::FailureKind;

/// Thread-safe processing statistics tracker.
///
/// Tracks per-sample failures using atomic counters, so a single tracker can
/// be shared behind an `Arc` if chunks are ever scored in parallel. All
/// failure kinds are initialized to zero on creation.
#[derive(Debug)]
pub struct ProcessingStats {
    failures: HashMap<FailureKind, AtomicUsize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in FailureKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }

        ProcessingStats { failures }
    }

    /// Increment a failure counter.
    pub fn increment_failure(&self, kind: FailureKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                kind
            );
        }
    }

    /// Get the count for a failure kind.
    ///
    /// Returns 0 if the kind is not in the map (should never happen if properly initialized).
    pub fn get_failure_count(&self, kind: FailureKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total failure count across all kinds.
    pub fn total_failures(&self) -> usize {
        FailureKind::iter().map(|k| self.get_failure_count(k)).sum()
    }

    /// Resets every counter to zero.
    pub fn reset(&self) {
        for counter in self.failures.values() {
            counter.store(0, Ordering::SeqCst);
        }
    }
}
