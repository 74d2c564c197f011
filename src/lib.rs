//! # iterbench
//!
//! A microbenchmark harness comparing four equivalent ways of iterating over
//! a list of names and producing `"index: name"` formatted output.
//!
//! ## Components
//!
//! - [`dataset`]: deterministic name-list generation, selected by a
//!   [`dataset::DatasetVariant`] parameter
//! - [`strategy`]: the four interchangeable formatting strategies
//! - [`sink`]: consumers that keep formatted output observable so the
//!   optimizer cannot discard the work being timed
//! - [`runner`]: an in-process sweep runner with warmup, timed iterations,
//!   and a setup hook that regenerates the dataset before each iteration
//! - [`report`]: serializable result aggregation for terminal and CI output
//!
//! The Criterion bench targets under `benches/` drive the same strategies
//! with statistical sampling; the [`runner`] exists so the full sweep can
//! also run as a plain binary or as a reduced-parameter smoke test.

pub mod dataset;
pub mod report;
pub mod runner;
pub mod sink;
pub mod strategy;
