//! # Dataset Generation
//!
//! Deterministic name-list generation for the benchmark harness. A
//! [`DatasetVariant`] selects which list to build; [`generate`] materializes
//! it. Generation is pure: the same variant always yields the same list in
//! the same order, which is what makes timings comparable across strategies
//! and across iterations.

mod generator;
mod variant;

pub use generator::{expected_len, generate};
pub use variant::{DatasetError, DatasetResult, DatasetVariant};
