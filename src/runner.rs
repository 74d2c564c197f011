//! # Sweep Runner
//!
//! In-process measurement control for the strategy comparison. The runner
//! sweeps every configured [`DatasetVariant`] × [`Strategy`] pair, and for
//! each pair executes warmup iterations followed by timed measurement
//! iterations. Before every iteration the name list is regenerated through
//! the setup hook and fully overwritten; within an iteration the strategy is
//! invoked repeatedly against a [`BlackholeSink`] until the iteration's time
//! budget elapses.
//!
//! Forks are in-process repetitions of the whole warmup-plus-measurement
//! cycle per pair. Statistical sampling beyond mean/throughput is left to
//! the Criterion bench targets.

use crate::dataset::{self, DatasetVariant};
use crate::sink::BlackholeSink;
use crate::strategy::Strategy;
use serde::Serialize;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running a sweep.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The configuration names no variants or no strategies.
    #[error("empty sweep: {0}")]
    EmptySweep(&'static str),

    /// A completed sweep produced no results.
    #[error("benchmark run produced no results")]
    NoResults,
}

/// Result type alias for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Sweep configuration.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Timed iterations per fork.
    pub measurement_iterations: u32,
    /// Time budget of one timed iteration.
    pub measurement_time: Duration,
    /// Untimed warmup iterations per fork.
    pub warmup_iterations: u32,
    /// Time budget of one warmup iteration.
    pub warmup_time: Duration,
    /// In-process repetitions of the full cycle per pair.
    pub forks: u32,
    /// Dataset variants to sweep.
    pub variants: Vec<DatasetVariant>,
    /// Strategies to sweep.
    pub strategies: Vec<Strategy>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            measurement_iterations: 5,
            measurement_time: Duration::from_secs(10),
            warmup_iterations: 2,
            warmup_time: Duration::from_secs(2),
            forks: 1,
            variants: DatasetVariant::ALL.to_vec(),
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

impl RunnerConfig {
    /// Set the number of timed iterations per fork.
    pub fn with_measurement_iterations(mut self, iterations: u32) -> Self {
        self.measurement_iterations = iterations.max(1);
        self
    }

    /// Set the time budget of one timed iteration.
    pub fn with_measurement_time(mut self, time: Duration) -> Self {
        self.measurement_time = time;
        self
    }

    /// Set the number of warmup iterations per fork.
    pub fn with_warmup_iterations(mut self, iterations: u32) -> Self {
        self.warmup_iterations = iterations;
        self
    }

    /// Set the time budget of one warmup iteration.
    pub fn with_warmup_time(mut self, time: Duration) -> Self {
        self.warmup_time = time;
        self
    }

    /// Set the number of forks per pair.
    pub fn with_forks(mut self, forks: u32) -> Self {
        self.forks = forks.max(1);
        self
    }

    /// Restrict the sweep to the given variants.
    pub fn with_variants(mut self, variants: Vec<DatasetVariant>) -> Self {
        self.variants = variants;
        self
    }

    /// Restrict the sweep to the given strategies.
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }
}

/// Outcome of one (variant, strategy, fork) measurement.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// Strategy that was measured.
    pub strategy: Strategy,
    /// Dataset variant the strategy ran against.
    pub variant: DatasetVariant,
    /// Fork index, starting at 0.
    pub fork: u32,
    /// Strategy invocations completed across all timed iterations.
    pub total_ops: u64,
    /// Wall-clock time spent inside timed iterations.
    #[serde(with = "duration_secs")]
    pub elapsed: Duration,
    /// Mean nanoseconds per strategy invocation.
    pub mean_ns: f64,
    /// Strategy invocations per second.
    pub throughput_ops_sec: f64,
}

impl RunResult {
    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "{}/{} fork {}: {:.2} ops/s, {:.1} ns/op, {} total",
            self.strategy, self.variant, self.fork, self.throughput_ops_sec, self.mean_ns,
            self.total_ops
        )
    }
}

mod duration_secs {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }
}

/// Runs the full variant × strategy sweep.
#[derive(Debug, Default)]
pub struct SweepRunner {
    config: RunnerConfig,
}

impl SweepRunner {
    /// Create a runner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with an explicit configuration.
    pub fn with_config(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Access the configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run the sweep, producing one [`RunResult`] per
    /// (variant, strategy, fork) combination.
    pub fn run(&self) -> RunnerResult<Vec<RunResult>> {
        if self.config.variants.is_empty() {
            return Err(RunnerError::EmptySweep("no dataset variants configured"));
        }
        if self.config.strategies.is_empty() {
            return Err(RunnerError::EmptySweep("no strategies configured"));
        }

        info!(
            variants = self.config.variants.len(),
            strategies = self.config.strategies.len(),
            forks = self.config.forks,
            "starting benchmark sweep"
        );

        let mut results = Vec::new();
        for &variant in &self.config.variants {
            for &strategy in &self.config.strategies {
                for fork in 0..self.config.forks {
                    debug!(%variant, %strategy, fork, "measuring pair");
                    results.push(self.measure_pair(variant, strategy, fork));
                }
            }
        }

        if results.is_empty() {
            return Err(RunnerError::NoResults);
        }

        info!(results = results.len(), "sweep complete");
        Ok(results)
    }

    fn measure_pair(&self, variant: DatasetVariant, strategy: Strategy, fork: u32) -> RunResult {
        let mut sink = BlackholeSink;

        for _ in 0..self.config.warmup_iterations {
            // Setup hook: the name list is rebuilt from scratch, never
            // mutated in place.
            let names = dataset::generate(variant);
            let deadline = Instant::now() + self.config.warmup_time;
            while Instant::now() < deadline {
                strategy.run(&names, &mut sink);
            }
        }

        let mut total_ops = 0u64;
        let mut elapsed = Duration::ZERO;
        for iteration in 0..self.config.measurement_iterations {
            let names = dataset::generate(variant);
            let started = Instant::now();
            let deadline = started + self.config.measurement_time;
            let mut ops = 0u64;
            while Instant::now() < deadline {
                strategy.run(&names, &mut sink);
                ops += 1;
            }
            let iteration_elapsed = started.elapsed();
            debug!(%variant, %strategy, fork, iteration, ops, "iteration finished");
            total_ops += ops;
            elapsed += iteration_elapsed;
        }

        let secs = elapsed.as_secs_f64();
        let throughput = if secs > 0.0 { total_ops as f64 / secs } else { 0.0 };
        let mean_ns = if total_ops > 0 {
            elapsed.as_nanos() as f64 / total_ops as f64
        } else {
            0.0
        };

        RunResult {
            strategy,
            variant,
            fork,
            total_ops,
            elapsed,
            mean_ns,
            throughput_ops_sec: throughput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> RunnerConfig {
        RunnerConfig::default()
            .with_measurement_iterations(1)
            .with_measurement_time(Duration::from_millis(5))
            .with_warmup_iterations(0)
            .with_forks(1)
    }

    #[test]
    fn test_config_builder() {
        let config = RunnerConfig::default()
            .with_measurement_iterations(3)
            .with_measurement_time(Duration::from_secs(1))
            .with_forks(3);
        assert_eq!(config.measurement_iterations, 3);
        assert_eq!(config.measurement_time, Duration::from_secs(1));
        assert_eq!(config.forks, 3);
    }

    #[test]
    fn test_config_clamps_zero_counts() {
        let config = RunnerConfig::default()
            .with_measurement_iterations(0)
            .with_forks(0);
        assert_eq!(config.measurement_iterations, 1);
        assert_eq!(config.forks, 1);
    }

    #[test]
    fn test_empty_variant_sweep_is_rejected() {
        let runner = SweepRunner::with_config(fast_config().with_variants(Vec::new()));
        assert!(matches!(runner.run(), Err(RunnerError::EmptySweep(_))));
    }

    #[test]
    fn test_empty_strategy_sweep_is_rejected() {
        let runner = SweepRunner::with_config(fast_config().with_strategies(Vec::new()));
        assert!(matches!(runner.run(), Err(RunnerError::EmptySweep(_))));
    }

    #[test]
    fn test_single_pair_run() {
        let config = fast_config()
            .with_variants(vec![DatasetVariant::FiveNames])
            .with_strategies(vec![Strategy::SinglePhase]);
        let results = SweepRunner::with_config(config).run().unwrap();

        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert!(result.total_ops > 0);
        assert!(result.throughput_ops_sec > 0.0);
        assert!(result.mean_ns > 0.0);
        assert!(result.summary().contains("fused_stream"));
    }
}
