//! Per-strategy performance metrics.
//!
//! Every strategy produces exactly one [`MetricRecord`] per run so that
//! runs of different strategies stay directly comparable. The record
//! shape is consumed as-is by reporting layers; with the `serde`
//! feature enabled it serializes to the same field names.

use std::time::Duration;

/// Performance record for one strategy run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricRecord {
    /// Human-readable strategy name, e.g. `"Backtracking"`.
    pub method: String,

    /// Wall-clock run time in seconds.
    pub time: f64,

    /// Number of solutions the run produced.
    pub solutions_found: usize,

    /// Strategy-specific work counter: nodes visited, states expanded,
    /// permutations examined, generations, or episodes. Absent when a
    /// strategy has no natural counter.
    pub iterations: Option<usize>,

    /// Solutions per second; zero for degenerate zero-time runs.
    pub efficiency: f64,
}

impl MetricRecord {
    /// Builds a record, deriving `efficiency` from the other fields.
    ///
    /// A zero elapsed time (possible for trivial N) yields an
    /// efficiency of 0 rather than a division fault.
    pub fn new(
        method: impl Into<String>,
        elapsed: Duration,
        solutions_found: usize,
        iterations: Option<usize>,
    ) -> Self {
        let time = elapsed.as_secs_f64();
        let efficiency = if time > 0.0 {
            solutions_found as f64 / time
        } else {
            0.0
        };
        Self {
            method: method.into(),
            time,
            solutions_found,
            iterations,
            efficiency,
        }
    }
}
