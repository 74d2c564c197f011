//! # Reporting
//!
//! Structured summaries of sweep results for CI integration and
//! human-readable terminal output.

use crate::runner::RunResult;
use serde::Serialize;
use std::collections::BTreeMap;

/// A single reported measurement.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    /// Strategy name.
    pub name: String,
    /// Dataset variant the strategy ran against.
    pub group: String,
    /// Fork index.
    pub fork: u32,
    /// Total strategy invocations.
    pub iterations: u64,
    /// Mean nanoseconds per invocation.
    pub mean_ns: f64,
    /// Invocations per second.
    pub throughput_ops_sec: f64,
}

impl From<&RunResult> for Measurement {
    fn from(result: &RunResult) -> Self {
        Self {
            name: result.strategy.name().to_string(),
            group: result.variant.name().to_string(),
            fork: result.fork,
            iterations: result.total_ops,
            mean_ns: result.mean_ns,
            throughput_ops_sec: result.throughput_ops_sec,
        }
    }
}

/// Accumulates measurements and produces reports.
#[derive(Debug, Default, Serialize)]
pub struct BenchReport {
    /// Suite name.
    pub suite_name: String,
    /// RFC 3339 timestamp of report creation.
    pub timestamp: String,
    /// Collected measurements.
    pub measurements: Vec<Measurement>,
}

impl BenchReport {
    /// Create an empty report.
    pub fn new(suite_name: &str) -> Self {
        Self {
            suite_name: suite_name.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            measurements: Vec::new(),
        }
    }

    /// Build a report directly from sweep results.
    pub fn from_results(suite_name: &str, results: &[RunResult]) -> Self {
        let mut report = Self::new(suite_name);
        for result in results {
            report.add(Measurement::from(result));
        }
        report
    }

    /// Add one measurement.
    pub fn add(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    /// Produce a grouped summary table as a string.
    pub fn summary(&self) -> String {
        let mut groups: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
        for m in &self.measurements {
            groups.entry(&m.group).or_default().push(m);
        }

        let mut out = String::new();
        out.push_str(&format!(
            "\n=== {} ({}) ===\n\n",
            self.suite_name, self.timestamp
        ));

        for (group, measurements) in &groups {
            out.push_str(&format!("-- {} --\n", group));
            out.push_str(&format!(
                "  {:<24} {:>6} {:>14} {:>16}\n",
                "Strategy", "Fork", "Mean (ns)", "Throughput"
            ));
            for m in measurements {
                let tp = if m.throughput_ops_sec > 1_000_000.0 {
                    format!("{:.2}M ops/s", m.throughput_ops_sec / 1_000_000.0)
                } else if m.throughput_ops_sec > 1_000.0 {
                    format!("{:.2}K ops/s", m.throughput_ops_sec / 1_000.0)
                } else {
                    format!("{:.2} ops/s", m.throughput_ops_sec)
                };
                out.push_str(&format!(
                    "  {:<24} {:>6} {:>14.1} {:>16}\n",
                    m.name, m.fork, m.mean_ns, tp
                ));
            }
            out.push('\n');
        }
        out
    }

    /// Serialize the report to JSON for CI integration.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
