// Report builder tests.

use super::*;
use crate::error_handling::{InvalidUrlError, UndefinedMetricError};
use crate::evaluation::evaluate;
use crate::features::extract;
use crate::models::Sample;
use crate::scoring::RiskResult;

/// Builds an evaluated sample with a forced verdict.
fn evaluated(expected: Verdict, predicted_malicious: bool) -> EvaluatedSample {
    let features = extract("http://x").unwrap();
    let score = if predicted_malicious { 90.0 } else { 10.0 };
    let sample = match expected {
        Verdict::Malicious => Sample::malicious("http://x".to_string()),
        Verdict::Safe => Sample::genuine("http://x".to_string()),
    };
    EvaluatedSample::new(sample, Ok(RiskResult::from_score(score, features)))
}

fn failed(expected: Verdict) -> EvaluatedSample {
    let sample = match expected {
        Verdict::Malicious => Sample::malicious("nope".to_string()),
        Verdict::Safe => Sample::genuine("nope".to_string()),
    };
    let error = InvalidUrlError::Parse {
        url: "nope".to_string(),
        source: url::ParseError::RelativeUrlWithoutBase,
    };
    EvaluatedSample::new(sample, Err(error))
}

fn repeat(sample: EvaluatedSample, n: usize) -> Vec<EvaluatedSample> {
    vec![sample; n]
}

#[test]
fn test_mixed_confusion_matrix() {
    let mut results = Vec::new();
    results.extend(repeat(evaluated(Verdict::Malicious, true), 3)); // TP
    results.extend(repeat(evaluated(Verdict::Safe, true), 1)); // FP
    results.extend(repeat(evaluated(Verdict::Safe, false), 5)); // TN
    results.extend(repeat(evaluated(Verdict::Malicious, false), 1)); // FN

    let report = build_report(&results);
    assert_eq!(
        report.confusion_matrix,
        ConfusionMatrix {
            true_positives: 3,
            false_positives: 1,
            true_negatives: 5,
            false_negatives: 1,
        }
    );
    assert_eq!(report.summary.total, 10);
    assert_eq!(report.summary.malicious_labeled, 4);
    assert_eq!(report.summary.genuine_labeled, 6);
    assert_eq!(report.summary.accuracy, Some(80.0));
    assert_eq!(report.summary.precision, Some(75.0));
    assert_eq!(report.summary.recall, Some(75.0));
    assert_eq!(report.summary.f1, Some(75.0));
    assert_eq!(report.details.len(), 10);
}

#[test]
fn test_no_positive_predictions_leaves_precision_undefined() {
    let results = repeat(evaluated(Verdict::Safe, false), 4);
    let report = build_report(&results);
    assert_eq!(report.confusion_matrix.true_positives, 0);
    assert_eq!(report.confusion_matrix.false_positives, 0);
    assert_eq!(report.summary.accuracy, Some(100.0));
    assert_eq!(report.summary.precision, None);
    assert_eq!(report.summary.recall, None);
    assert_eq!(report.summary.f1, None);
    assert_eq!(
        report.confusion_matrix.precision(),
        Err(UndefinedMetricError {
            metric: "precision"
        })
    );
}

#[test]
fn test_undefined_precision_is_distinct_from_zero_recall() {
    // Every malicious sample missed: recall is a real 0%, precision undefined
    let results = repeat(evaluated(Verdict::Malicious, false), 2);
    let report = build_report(&results);
    assert_eq!(report.summary.precision, None);
    assert_eq!(report.summary.recall, Some(0.0));
    assert_eq!(report.summary.f1, None);
}

#[test]
fn test_f1_undefined_when_precision_and_recall_are_zero() {
    let results = vec![
        evaluated(Verdict::Safe, true),
        evaluated(Verdict::Malicious, false),
    ];
    let matrix = ConfusionMatrix::from_results(&results);
    assert_eq!(matrix.precision(), Ok(0.0));
    assert_eq!(matrix.recall(), Ok(0.0));
    assert_eq!(matrix.f1(), Err(UndefinedMetricError { metric: "f1" }));
}

#[test]
fn test_percentages_are_rounded_but_raw_ratio_is_kept() {
    let mut results = vec![evaluated(Verdict::Malicious, true)];
    results.extend(repeat(evaluated(Verdict::Safe, true), 2));
    let report = build_report(&results);
    assert_eq!(report.summary.precision, Some(33.33));
    let raw = report.confusion_matrix.precision().unwrap();
    assert!((raw - 1.0 / 3.0).abs() < 1e-15);
}

#[test]
fn test_f1_uses_unrounded_inputs() {
    // precision 2/3, recall 1/2 -> f1 = 4/7
    let results = vec![
        evaluated(Verdict::Malicious, true),
        evaluated(Verdict::Malicious, true),
        evaluated(Verdict::Safe, true),
        evaluated(Verdict::Malicious, false),
        evaluated(Verdict::Malicious, false),
    ];
    let matrix = ConfusionMatrix::from_results(&results);
    assert!((matrix.f1().unwrap() - 4.0 / 7.0).abs() < 1e-12);
    assert_eq!(build_report(&results).summary.f1, Some(57.14));
}

#[test]
fn test_empty_results_do_not_panic() {
    let report = build_report(&[]);
    assert_eq!(report.summary.total, 0);
    assert_eq!(report.summary.accuracy, None);
    assert_eq!(report.summary.precision, None);
    assert_eq!(report.summary.recall, None);
    assert_eq!(report.summary.f1, None);
    assert_eq!(report.confusion_matrix.total(), 0);
}

#[test]
fn test_failed_samples_count_toward_total_only() {
    let results = vec![
        evaluated(Verdict::Safe, false),
        failed(Verdict::Malicious),
        failed(Verdict::Safe),
        evaluated(Verdict::Malicious, true),
    ];
    let report = build_report(&results);
    assert_eq!(report.summary.total, 4);
    assert_eq!(report.summary.failed, 2);
    assert_eq!(report.confusion_matrix.total(), 2);
    assert_eq!(
        report.confusion_matrix.total() + report.summary.failed,
        report.summary.total
    );
    // Failed samples are never correct
    assert_eq!(report.summary.accuracy, Some(50.0));
}

#[test]
fn test_confusion_matrix_identity_for_generated_batch() {
    let results = evaluate(crate::dataset::generate(200), 32).unwrap();
    let report = build_report(&results);
    assert_eq!(report.summary.failed, 0);
    assert_eq!(report.confusion_matrix.total(), report.summary.total);
    assert_eq!(report.summary.malicious_labeled, 60);
    assert_eq!(report.summary.genuine_labeled, 140);
}

#[test]
fn test_summary_display_marks_undefined() {
    let report = build_report(&repeat(evaluated(Verdict::Safe, false), 3));
    let text = report.summary.to_string();
    assert!(text.contains("accuracy=100.00%"));
    assert!(text.contains("precision=undefined"));
}

#[test]
fn test_report_json_shape() {
    let report = build_report(&repeat(evaluated(Verdict::Safe, false), 1));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["modelVersion"], "static-linear-v1");
    assert_eq!(json["confusionMatrix"]["trueNegatives"], 1);
    assert_eq!(json["summary"]["maliciousLabeled"], 0);
    assert!(json["summary"]["precision"].is_null());
}

#[test]
fn test_to_percent_rounds_to_two_places() {
    assert_eq!(to_percent(0.5), 50.0);
    assert_eq!(to_percent(2.0 / 3.0), 66.67);
    assert_eq!(to_percent(0.0), 0.0);
}
