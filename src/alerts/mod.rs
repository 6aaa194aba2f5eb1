//! Pre-scored alert records from the external fraud-analysis source.
//!
//! These records arrive already classified; nothing here scores or validates
//! them beyond JSON shape. Reads are bounded by a timeout so a stalled source
//! surfaces as `AlertSourceError::Timeout` instead of hanging the caller.

use std::path::Path;
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error_handling::AlertSourceError;

/// Filter value that matches every alert type.
pub const ALL_TYPES: &str = "all";

/// One alert as delivered by the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    #[serde(rename = "type")]
    pub alert_type: String,
    pub is_fraud: bool,
    /// Percentage, 0-100
    pub confidence_score: f64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    /// Overall accuracy of the source's own engine, repeated on each record
    #[serde(default)]
    pub system_accuracy: Option<f64>,
}

impl AlertRecord {
    pub fn status_text(&self) -> &'static str {
        if self.is_fraud {
            "FRAUD DETECTED"
        } else {
            "SAFE / UNCERTAIN"
        }
    }
}

/// Reads a JSON array of alert records from `path`.
///
/// # Errors
///
/// - `AlertSourceError::Timeout` if reading takes longer than `timeout`
/// - `AlertSourceError::Io` if the file cannot be read
/// - `AlertSourceError::Malformed` if the content is not an array of alerts
pub async fn load_alerts(path: &Path, timeout: Duration) -> Result<Vec<AlertRecord>, AlertSourceError> {
    let contents = tokio::time::timeout(timeout, tokio::fs::read_to_string(path))
        .await
        .map_err(|_| AlertSourceError::Timeout {
            path: path.to_path_buf(),
            seconds: timeout.as_secs(),
        })?
        .map_err(|source| AlertSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let alerts = parse_alerts(&contents).map_err(|source| AlertSourceError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded {} alerts from {}", alerts.len(), path.display());
    Ok(alerts)
}

/// Parses a JSON array of alert records.
pub fn parse_alerts(json: &str) -> Result<Vec<AlertRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Alerts whose type equals `alert_type`, or all alerts for `"all"`.
pub fn filter_alerts<'a>(alerts: &'a [AlertRecord], alert_type: &str) -> Vec<&'a AlertRecord> {
    alerts
        .iter()
        .filter(|alert| alert_type == ALL_TYPES || alert.alert_type == alert_type)
        .collect()
}

/// The source-reported accuracy, taken from the first record.
pub fn system_accuracy(alerts: &[AlertRecord]) -> Option<f64> {
    alerts.first().and_then(|alert| alert.system_accuracy)
}
