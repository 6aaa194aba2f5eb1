//! Tests for CLI subcommand parsing.

use clap::Parser;
use std::path::PathBuf;
use url_risk::config::{
    Cli, Command, DEFAULT_CHUNK_DELAY_MS, DEFAULT_CHUNK_SIZE, DEFAULT_DATASET_SIZE,
    DEFAULT_HISTORY_PATH,
};
use url_risk::EvaluationConfig;

#[test]
fn test_check_parses_urls_and_flags() {
    let cli = Cli::try_parse_from([
        "url_risk",
        "check",
        "https://example.com",
        "http://login.tk",
        "--explain",
        "--no-history",
    ])
    .expect("check should parse");

    match cli.command {
        Command::Check(args) => {
            assert_eq!(args.urls, vec!["https://example.com", "http://login.tk"]);
            assert!(args.explain);
            assert!(args.no_history);
        }
        other => panic!("expected check, got {:?}", other),
    }
    assert_eq!(cli.history_path, PathBuf::from(DEFAULT_HISTORY_PATH));
}

#[test]
fn test_check_requires_at_least_one_url() {
    assert!(Cli::try_parse_from(["url_risk", "check"]).is_err());
}

#[test]
fn test_evaluate_defaults() {
    let cli = Cli::try_parse_from(["url_risk", "evaluate"]).expect("evaluate should parse");
    let Command::Evaluate(args) = cli.command else {
        panic!("expected evaluate");
    };
    assert_eq!(args.count, DEFAULT_DATASET_SIZE);
    assert_eq!(args.chunk_size, DEFAULT_CHUNK_SIZE);
    assert_eq!(args.chunk_delay_ms, DEFAULT_CHUNK_DELAY_MS);
    assert!(args.csv.is_none());
    assert!(args.json.is_none());
}

#[test]
fn test_evaluate_args_convert_to_config() {
    let cli = Cli::try_parse_from([
        "url_risk",
        "evaluate",
        "--count",
        "500",
        "--chunk-size",
        "25",
        "--chunk-delay-ms",
        "0",
        "--csv",
        "out.csv",
    ])
    .expect("evaluate should parse");
    let Command::Evaluate(args) = cli.command else {
        panic!("expected evaluate");
    };

    let config = EvaluationConfig::from(args);
    assert_eq!(config.dataset_size, 500);
    assert_eq!(config.chunk_size, 25);
    assert_eq!(config.chunk_delay_ms, 0);
    assert_eq!(config.csv_output, Some(PathBuf::from("out.csv")));
    assert!(config.validate().is_ok());
}

#[test]
fn test_evaluate_accepts_zero_count() {
    let cli = Cli::try_parse_from(["url_risk", "evaluate", "--count", "0"])
        .expect("zero count is a valid (empty) run");
    let Command::Evaluate(args) = cli.command else {
        panic!("expected evaluate");
    };
    assert_eq!(args.count, 0);
}

#[test]
fn test_evaluate_rejects_bad_sizes() {
    for argv in [
        ["url_risk", "evaluate", "--count", "-5"],
        ["url_risk", "evaluate", "--count", "12.5"],
        ["url_risk", "evaluate", "--count", "many"],
        ["url_risk", "evaluate", "--chunk-size", "0"],
        ["url_risk", "evaluate", "--chunk-size", "-1"],
    ] {
        assert!(Cli::try_parse_from(argv).is_err(), "{:?} should be rejected", argv);
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "url_risk",
        "history",
        "--clear",
        "--history-path",
        "/tmp/h.json",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("global flags should be accepted after the subcommand");

    assert_eq!(cli.history_path, PathBuf::from("/tmp/h.json"));
    assert_eq!(log::LevelFilter::from(cli.log_level), log::LevelFilter::Debug);
    assert!(matches!(cli.log_format, url_risk::LogFormat::Json));
    assert!(matches!(cli.command, Command::History(ref args) if args.clear));
}

#[test]
fn test_alerts_type_filter_defaults_to_all() {
    let cli = Cli::try_parse_from(["url_risk", "alerts", "alerts.json"]).expect("alerts should parse");
    let Command::Alerts(args) = cli.command else {
        panic!("expected alerts");
    };
    assert_eq!(args.file, PathBuf::from("alerts.json"));
    assert_eq!(args.alert_type, url_risk::alerts::ALL_TYPES);

    let cli = Cli::try_parse_from(["url_risk", "alerts", "alerts.json", "--type", "Phishing"])
        .expect("alerts --type should parse");
    let Command::Alerts(args) = cli.command else {
        panic!("expected alerts");
    };
    assert_eq!(args.alert_type, "Phishing");
}
