//! Benchmark profiles for ragged arrays.
//!
//! Provides pre-built row layouts for benchmarking:
//!
//! - [`reference_profile`]: 10K rows, lengths `0..32` (~155K elements)
//! - [`stress_profile`]: 100K rows, lengths `0..128`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ragged_array::RaggedArray;
use ragged_core::RaggedError;
use ragged_test_utils::fixtures::pseudo_random_lengths;

/// Seed used by every profile so runs are comparable.
pub const PROFILE_SEED: u64 = 0x5EED;

/// Rows of `f32` with deterministic pseudo-random lengths.
pub fn profile_rows(rows: usize, max_len: usize) -> Vec<Vec<f32>> {
    pseudo_random_lengths(rows, max_len, PROFILE_SEED)
        .into_iter()
        .enumerate()
        .map(|(i, len)| (0..len).map(|j| (i * 31 + j) as f32).collect())
        .collect()
}

/// 10K rows with lengths in `0..32`.
pub fn reference_profile() -> Result<RaggedArray<f32>, RaggedError> {
    RaggedArray::from_rows(profile_rows(10_000, 32))
}

/// 100K rows with lengths in `0..128`.
pub fn stress_profile() -> Result<RaggedArray<f32>, RaggedError> {
    RaggedArray::from_rows(profile_rows(100_000, 128))
}
