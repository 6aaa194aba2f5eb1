//! Recent URL check history.
//!
//! `ScanHistory` is an owned session value: callers load it, record checks
//! and save it back. Nothing here is process-global, so independent sessions
//! (and tests) never interfere with each other.

use std::collections::VecDeque;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::config::HISTORY_CAPACITY;
use crate::error_handling::HistoryError;
use crate::scoring::RiskResult;

/// Outcome class shown for a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CheckStatus {
    Safe,
    Danger,
}

impl CheckStatus {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Safe => "Safe",
            CheckStatus::Danger => "Suspicious",
        }
    }
}

/// A single recorded check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub status: CheckStatus,
    pub risk_score: f64,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

/// Most recent checks, newest first, bounded by a capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanHistory {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl Default for ScanHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl ScanHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Records a check at the front, dropping the oldest entries beyond capacity.
    pub fn record(&mut self, url: &str, result: &RiskResult) {
        self.record_at(url, result, Utc::now());
    }

    /// Same as `record`, with an explicit timestamp.
    pub fn record_at(&mut self, url: &str, result: &RiskResult, timestamp: DateTime<Utc>) {
        let status = if result.is_malicious {
            CheckStatus::Danger
        } else {
            CheckStatus::Safe
        };
        self.entries.push_front(HistoryEntry {
            url: url.to_string(),
            status,
            risk_score: result.risk_score,
            confidence: result.confidence,
            timestamp,
        });
        self.entries.truncate(self.capacity);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Loads a history file. A missing file is an empty history.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Io` if the file exists but cannot be read, and
    /// `HistoryError::Malformed` if it does not hold history JSON.
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No history file at {}, starting empty", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(HistoryError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let mut history: Self =
            serde_json::from_str(&contents).map_err(|source| HistoryError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        history.entries.truncate(history.capacity);
        Ok(history)
    }

    /// Writes the history as pretty JSON, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| HistoryError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| HistoryError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score;
    use tempfile::TempDir;

    #[test]
    fn test_record_puts_newest_first() {
        let mut history = ScanHistory::new();
        history.record("https://www.google.com", &score("https://www.google.com").unwrap());
        history.record(
            "http://bank-secure-login123.tk",
            &score("http://bank-secure-login123.tk").unwrap(),
        );

        let entries: Vec<&HistoryEntry> = history.entries().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].url, "http://bank-secure-login123.tk");
        assert_eq!(entries[0].status, CheckStatus::Danger);
        assert_eq!(entries[0].status.label(), "Suspicious");
        assert_eq!(entries[1].status, CheckStatus::Safe);
        assert_eq!(entries[1].status.label(), "Safe");
    }

    #[test]
    fn test_record_keeps_only_capacity() {
        let result = score("http://x").unwrap();
        let mut history = ScanHistory::new();
        for i in 0..15 {
            history.record(&format!("http://x/{i}"), &result);
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.entries().next().unwrap().url, "http://x/14");
        assert_eq!(history.entries().last().unwrap().url, "http://x/5");
    }

    #[test]
    fn test_clear() {
        let mut history = ScanHistory::new();
        history.record("http://x", &score("http://x").unwrap());
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_sessions_are_independent() {
        let result = score("http://x").unwrap();
        let mut first = ScanHistory::new();
        let second = ScanHistory::new();
        first.record("http://x", &result);
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let history = ScanHistory::load(&dir.path().join("missing.json")).unwrap();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), HISTORY_CAPACITY);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        let mut history = ScanHistory::with_capacity(3);
        history.record("http://x", &score("http://x").unwrap());
        history.save(&path).unwrap();

        let loaded = ScanHistory::load(&path).unwrap();
        assert_eq!(loaded.capacity(), 3);
        assert_eq!(loaded.len(), 1);
        let (saved, read) = (
            history.entries().next().unwrap(),
            loaded.entries().next().unwrap(),
        );
        assert_eq!(read.url, saved.url);
        assert_eq!(read.status, saved.status);
        assert_eq!(read.timestamp, saved.timestamp);
        assert!((read.risk_score - saved.risk_score).abs() < 1e-9);
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            ScanHistory::load(&path),
            Err(HistoryError::Malformed { .. })
        ));
    }
}
