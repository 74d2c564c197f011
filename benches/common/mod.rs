#![allow(missing_docs, dead_code)]
//! Shared benchmark support for the iterbench targets.

use iterbench::dataset::{self, DatasetVariant};

/// Variants swept by every bench target.
pub const VARIANTS: [DatasetVariant; 2] = DatasetVariant::ALL;

/// Materialize the name list for a variant.
pub fn name_list(variant: DatasetVariant) -> Vec<String> {
    dataset::generate(variant)
}

/// Entry count for a variant, for throughput annotations.
pub fn entry_count(variant: DatasetVariant) -> u64 {
    dataset::expected_len(variant) as u64
}
