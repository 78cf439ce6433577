//! Machine-readable renderings of a search run (JSON and CSV) for stdout.

use std::io::Write;

use serde::Serialize;

use crate::domain::{FitLimits, Rejection, SearchConfig, SearchOutcome, Solution};
use crate::error::AppError;

/// JSON schema for `piston search --format json`.
#[derive(Debug, Serialize)]
pub struct SearchReport<'a> {
    pub tool: &'static str,
    pub limits: FitLimits,
    pub distinct_stock: bool,
    pub candidates_evaluated: u64,
    pub skipped_same_stock: u64,
    pub rejections: Vec<RejectionCount>,
    pub solutions_found: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solutions: Option<&'a [Solution]>,
    pub best: Option<BestSolution>,
}

#[derive(Debug, Serialize)]
pub struct RejectionCount {
    pub reason: Rejection,
    pub label: &'static str,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct BestSolution {
    #[serde(flatten)]
    pub solution: Solution,
    pub gap_mm: f64,
}

impl<'a> SearchReport<'a> {
    pub fn new(outcome: &'a SearchOutcome, config: &SearchConfig) -> Self {
        Self {
            tool: "piston",
            limits: config.limits,
            distinct_stock: config.distinct_stock,
            candidates_evaluated: outcome.candidates_evaluated,
            skipped_same_stock: outcome.skipped_same_stock,
            rejections: outcome
                .tally
                .iter()
                .map(|(reason, count)| RejectionCount {
                    reason,
                    label: reason.label(),
                    count,
                })
                .collect(),
            solutions_found: outcome.solutions.len(),
            solutions: (!config.best_only).then_some(outcome.solutions.as_slice()),
            best: outcome.best.map(|solution| BestSolution {
                solution,
                gap_mm: solution.gap_mm(),
            }),
        }
    }
}

/// Write the run as pretty-printed JSON.
pub fn write_json<W: Write>(writer: W, outcome: &SearchOutcome, config: &SearchConfig) -> Result<(), AppError> {
    let report = SearchReport::new(outcome, config);
    serde_json::to_writer_pretty(writer, &report)
        .map_err(|e| AppError::output(format!("Failed to write JSON report: {e}")))?;
    Ok(())
}

/// Write one CSV row per solution (`shell,ring,piston,gap,exposed_ring_fraction`).
pub fn write_csv<W: Write>(writer: W, outcome: &SearchOutcome) -> Result<(), AppError> {
    let mut wtr = csv::Writer::from_writer(writer);
    if outcome.solutions.is_empty() {
        wtr.write_record(["shell", "ring", "piston", "gap", "exposed_ring_fraction"])
            .map_err(|e| AppError::output(format!("Failed to write CSV header: {e}")))?;
    }
    for s in &outcome.solutions {
        wtr.serialize(s)
            .map_err(|e| AppError::output(format!("Failed to write CSV row: {e}")))?;
    }
    wtr.flush()
        .map_err(|e| AppError::output(format!("Failed to flush CSV output: {e}")))?;
    Ok(())
}
