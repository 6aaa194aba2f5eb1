//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_risk` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::Path;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;

use url_risk::app::{normalize_input_url, print_report_summary, spawn_interrupt_handler};
use url_risk::config::{AlertsArgs, CheckArgs, Cli, Command, EvaluateArgs, HistoryArgs};
use url_risk::initialization::init_logger_with;
use url_risk::report::format_percent;
use url_risk::{
    explain, filter_alerts, load_alerts, run_evaluation, score, EvaluationConfig, ScanHistory,
};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; values then come from the real environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.into(), cli.log_format).context("Failed to initialize logger")?;

    let outcome = match cli.command {
        Command::Check(args) => check(args, &cli.history_path),
        Command::Evaluate(args) => evaluate(args).await,
        Command::History(args) => history(args, &cli.history_path),
        Command::Alerts(args) => alerts(args).await,
    };

    if let Err(e) = outcome {
        eprintln!("url_risk error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

fn check(args: CheckArgs, history_path: &Path) -> Result<()> {
    let mut history = if args.no_history {
        None
    } else {
        Some(ScanHistory::load(history_path).context("Failed to load history")?)
    };

    let mut failures = 0usize;
    for raw in &args.urls {
        let Some(url) = normalize_input_url(raw) else {
            failures += 1;
            continue;
        };
        let result = match score(&url) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("{}: {}", url, e);
                failures += 1;
                continue;
            }
        };

        println!(
            "{}  score {:.2}  confidence {:.2}%  {}",
            url,
            result.risk_score,
            result.confidence,
            if result.is_malicious { "MALICIOUS" } else { "safe" }
        );

        if args.explain {
            for term in explain(&url)? {
                println!(
                    "    {:<26} value {:>8.4}  weight {:>6.2}  contribution {:>8.4}",
                    term.feature, term.value, term.weight, term.contribution
                );
            }
        }

        if let Some(history) = history.as_mut() {
            history.record(&url, &result);
        }
    }

    if let Some(history) = history {
        history.save(history_path).context("Failed to save history")?;
    }

    if failures > 0 {
        anyhow::bail!("{} of {} URL(s) could not be scored", failures, args.urls.len());
    }
    Ok(())
}

async fn evaluate(args: EvaluateArgs) -> Result<()> {
    let config = EvaluationConfig::from(args);
    let cancel = CancellationToken::new();
    let interrupt = spawn_interrupt_handler(cancel.clone());

    let run = run_evaluation(config, cancel.clone()).await;
    // Release the interrupt handler whether or not the run succeeded
    cancel.cancel();
    let _ = interrupt.await;
    let run = run?;

    print_report_summary(&run.report);
    println!("{}", run.report.summary);
    println!(
        "{} {} chunk(s) in {:.1}s",
        if run.cancelled { "Stopped after" } else { "Completed" },
        run.chunks,
        run.elapsed_seconds
    );
    Ok(())
}

fn history(args: HistoryArgs, history_path: &Path) -> Result<()> {
    let mut history = ScanHistory::load(history_path).context("Failed to load history")?;

    if args.clear {
        history.clear();
        history.save(history_path).context("Failed to save history")?;
        println!("History cleared");
        return Ok(());
    }

    if history.is_empty() {
        println!("No checks recorded yet");
        return Ok(());
    }

    for entry in history.entries() {
        println!(
            "{}  {:<10}  score {:>6.2}  {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.status.label(),
            entry.risk_score,
            entry.url
        );
    }
    Ok(())
}

async fn alerts(args: AlertsArgs) -> Result<()> {
    let timeout = Duration::from_secs(args.timeout_seconds);
    let records = load_alerts(&args.file, timeout).await?;

    if let Some(accuracy) = url_risk::alerts::system_accuracy(&records) {
        println!("Source accuracy: {}", format_percent(Some(accuracy)));
    }

    let shown = filter_alerts(&records, &args.alert_type);
    if shown.is_empty() {
        println!("No alerts of type '{}'", args.alert_type);
        return Ok(());
    }

    for alert in shown {
        println!(
            "[{}] {:<16} {:>6.2}%  {}",
            alert.status_text(),
            alert.alert_type,
            alert.confidence_score,
            alert.url.as_deref().unwrap_or("-")
        );
        if let Some(keywords) = alert.keywords.as_deref() {
            println!("    keywords: {}", keywords);
        }
        if let Some(location) = alert.location.as_deref() {
            println!("    location: {}", location);
        }
    }
    Ok(())
}
