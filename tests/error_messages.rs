//! Tests that user-facing errors name the offending input.

use url_risk::config::{parse_chunk_size, parse_dataset_size, MAX_DATASET_SIZE};
use url_risk::{score, BatchEvaluator, DatasetSizeError, EvaluationConfig, InvalidUrlError};

#[test]
fn test_negative_count_message() {
    let err = parse_dataset_size("-5").unwrap_err();
    assert_eq!(
        err,
        DatasetSizeError::Negative {
            field: "count",
            value: -5
        }
    );
    assert_eq!(err.to_string(), "count must be a non-negative integer, got -5");
}

#[test]
fn test_non_integer_count_message() {
    let err = parse_dataset_size("3.7").unwrap_err();
    assert_eq!(err.to_string(), "count must be an integer, got '3.7'");
}

#[test]
fn test_zero_chunk_size_message() {
    let err = parse_chunk_size("0").unwrap_err();
    assert_eq!(err, DatasetSizeError::ZeroChunkSize);
    assert_eq!(err.to_string(), "chunk_size must be greater than 0");
}

#[test]
fn test_too_large_count_message() {
    let raw = (MAX_DATASET_SIZE + 1).to_string();
    let err = parse_dataset_size(&raw).unwrap_err();
    assert!(err.to_string().contains("exceeds the maximum"), "{}", err);
}

#[test]
fn test_config_validate_rejects_zero_chunk() {
    let config = EvaluationConfig {
        chunk_size: 0,
        ..Default::default()
    };
    assert_eq!(config.validate(), Err(DatasetSizeError::ZeroChunkSize));
    assert!(BatchEvaluator::new(Vec::new(), 0).is_err());
}

#[test]
fn test_invalid_url_messages_include_url() {
    let err = score("example.com/login").unwrap_err();
    assert!(matches!(err, InvalidUrlError::Parse { .. }));
    assert!(err.to_string().contains("example.com/login"), "{}", err);

    let err = score("mailto:someone@example.com").unwrap_err();
    assert_eq!(
        err,
        InvalidUrlError::MissingHost {
            url: "mailto:someone@example.com".to_string()
        }
    );
    assert!(err.to_string().contains("has no host"));
}

#[test]
fn test_empty_string_is_invalid() {
    assert!(score("").is_err());
}
