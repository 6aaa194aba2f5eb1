//! CSV export functionality.
//!
//! One row per evaluated sample with the risk result and every feature
//! flattened into columns. Failed samples keep their label columns and carry
//! the error text; score and feature columns are left empty.

use anyhow::{Context, Result};
use csv::Writer;
use std::io::{self, Write};
use std::path::Path;

use crate::evaluation::EvaluatedSample;

const HEADER: [&str; 20] = [
    "url",
    "type",
    "expected",
    "actual",
    "correct",
    "risk_score",
    "is_malicious",
    "confidence",
    "length",
    "has_https",
    "num_dots",
    "num_hyphens",
    "has_ip",
    "tld",
    "suspicious_keyword_count",
    "entropy",
    "path_depth",
    "has_port",
    "special_char_count",
    "error",
];

/// Exports evaluated samples to CSV.
///
/// # Arguments
///
/// * `results` - Evaluated samples, written in order
/// * `output` - Output file path (or stdout if None)
///
/// # Returns
///
/// Returns the number of records exported, or an error if export fails.
pub fn export_csv(results: &[EvaluatedSample], output: Option<&Path>) -> Result<usize> {
    // Create CSV writer (use trait object to handle both File and Stdout)
    let writer: Box<dyn Write> = if let Some(output_path) = output {
        let file = std::fs::File::create(output_path).context(format!(
            "Failed to create output file: {}",
            output_path.display()
        ))?;
        Box::new(file)
    } else {
        Box::new(io::stdout())
    };

    write_csv(results, writer)
}

/// Writes evaluated samples as CSV to any writer.
pub fn write_csv<W: Write>(results: &[EvaluatedSample], sink: W) -> Result<usize> {
    let mut writer = Writer::from_writer(sink);
    writer
        .write_record(HEADER)
        .context("Failed to write CSV header")?;

    for result in results {
        writer
            .write_record(row(result))
            .with_context(|| format!("Failed to write CSV row for {}", result.url))?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(results.len())
}

fn row(result: &EvaluatedSample) -> Vec<String> {
    let mut fields = vec![
        result.url.clone(),
        result.origin.to_string(),
        result.expected.to_string(),
        result.actual.map(|v| v.to_string()).unwrap_or_default(),
        result.correct.to_string(),
    ];

    match &result.result {
        Some(risk) => {
            let f = &risk.features;
            fields.extend([
                format!("{:.4}", risk.risk_score),
                risk.is_malicious.to_string(),
                format!("{:.4}", risk.confidence),
                f.length.to_string(),
                f.has_https.to_string(),
                f.num_dots.to_string(),
                f.num_hyphens.to_string(),
                f.has_ip.to_string(),
                f.tld.clone(),
                f.suspicious_keyword_count.to_string(),
                format!("{:.6}", f.entropy),
                f.path_depth.to_string(),
                f.has_port.to_string(),
                f.special_char_count.to_string(),
            ]);
        }
        None => fields.extend(vec![String::new(); 14]),
    }

    fields.push(result.error.clone().unwrap_or_default());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::evaluate;
    use crate::models::Sample;

    #[test]
    fn test_row_width_matches_header() {
        let results = evaluate(
            vec![
                Sample::genuine("https://www.google.com".to_string()),
                Sample::malicious("not a url".to_string()),
            ],
            2,
        )
        .unwrap();
        for result in &results {
            assert_eq!(row(result).len(), HEADER.len());
        }
    }

    #[test]
    fn test_write_csv_to_buffer() {
        let results = evaluate(
            vec![Sample::malicious("http://bank-secure-login123.tk".to_string())],
            1,
        )
        .unwrap();
        let mut buffer = Vec::new();
        let written = write_csv(&results, &mut buffer).unwrap();
        assert_eq!(written, 1);

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("url,type,expected,actual"));
        let data = lines.next().unwrap();
        assert!(data.starts_with("http://bank-secure-login123.tk,malicious,malicious,malicious,true,100.0000"));
        assert!(data.contains(",tk,"));
    }

    #[test]
    fn test_failed_row_keeps_error() {
        let results = evaluate(vec![Sample::genuine("nope".to_string())], 1).unwrap();
        let fields = row(&results[0]);
        assert_eq!(fields[3], "");
        assert_eq!(fields[4], "false");
        assert!(fields[19].contains("nope"));
    }
}
