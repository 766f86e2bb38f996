use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::sed::classify::YsoClass;
use crate::sed::pipeline::{class_counts, ClassificationResult};

// ---------------------------------------------------------------------------
// Text report
// ---------------------------------------------------------------------------

/// One `<label> : <class>` line per source, in input order.
pub fn text_report(results: &[ClassificationResult]) -> String {
    results
        .iter()
        .map(|r| format!("{} : {}\n", r.label, r.class))
        .collect()
}

/// Per-class totals, e.g. `3 sources: Class I=1, Flat Spectrum=0, ...`.
pub fn summary_line(results: &[ClassificationResult]) -> String {
    let counts = class_counts(results);
    let parts: Vec<String> = counts
        .iter()
        .map(|(class, n)| format!("{class}={n}"))
        .collect();
    format!("{} sources: {}", results.len(), parts.join(", "))
}

// ---------------------------------------------------------------------------
// Machine-readable exports
// ---------------------------------------------------------------------------

/// Full results (flux densities and SED points included) as pretty JSON.
pub fn write_json<W: Write>(results: &[ClassificationResult], writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, results).context("writing JSON results")
}

#[derive(Serialize)]
struct CsvRow<'a> {
    label: &'a str,
    alpha: Option<f64>,
    class: YsoClass,
    log_lambda_cm_w1: f64,
    log_lambda_f_lambda_w1: Option<f64>,
    log_lambda_cm_w2: f64,
    log_lambda_f_lambda_w2: Option<f64>,
    log_lambda_cm_w3: f64,
    log_lambda_f_lambda_w3: Option<f64>,
    log_lambda_cm_w4: f64,
    log_lambda_f_lambda_w4: Option<f64>,
}

impl<'a> From<&'a ClassificationResult> for CsvRow<'a> {
    fn from(r: &'a ClassificationResult) -> Self {
        let [w1, w2, w3, w4] = &r.sed;
        CsvRow {
            label: &r.label,
            alpha: r.spectral_index,
            class: r.class,
            log_lambda_cm_w1: w1.log_wavelength_cm,
            log_lambda_f_lambda_w1: w1.log_lambda_f_lambda,
            log_lambda_cm_w2: w2.log_wavelength_cm,
            log_lambda_f_lambda_w2: w2.log_lambda_f_lambda,
            log_lambda_cm_w3: w3.log_wavelength_cm,
            log_lambda_f_lambda_w3: w3.log_lambda_f_lambda,
            log_lambda_cm_w4: w4.log_wavelength_cm,
            log_lambda_f_lambda_w4: w4.log_lambda_f_lambda,
        }
    }
}

/// One CSV row per source with α, class and the log-log SED points.
/// Undefined values are written as empty cells.
pub fn write_csv<W: Write>(results: &[ClassificationResult], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for r in results {
        wtr.serialize(CsvRow::from(r))
            .with_context(|| format!("writing CSV row for {}", r.label))?;
    }
    wtr.flush().context("flushing CSV output")?;
    Ok(())
}
