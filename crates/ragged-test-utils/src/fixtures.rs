//! Reusable row fixtures.
//!
//! - [`mixed_rows`] — three rows including an empty one.
//! - [`all_empty_rows`] — rows with no elements.
//! - [`staircase_rows`] — row `i` has `i` elements.

use ragged_array::RaggedArray;
use ragged_core::Element;

/// `[[1, 2, 3], [], [4]]`, packed as offsets `[0, 3, 3, 4]`.
pub fn mixed_rows() -> Vec<Vec<i32>> {
    vec![vec![1, 2, 3], vec![], vec![4]]
}

/// [`mixed_rows`] packed into an array.
pub fn mixed_array() -> RaggedArray<i32> {
    RaggedArray::new(vec![0, 3, 3, 4], vec![1, 2, 3, 4])
        .expect("fixture offsets are well formed")
}

/// `count` empty rows.
pub fn all_empty_rows<T>(count: usize) -> Vec<Vec<T>> {
    (0..count).map(|_| Vec::new()).collect()
}

/// `rows` rows where row `i` holds `i` copies of `fill`.
pub fn staircase_rows<T: Element>(rows: usize, fill: T) -> Vec<Vec<T>> {
    (0..rows).map(|i| vec![fill; i]).collect()
}

/// Deterministic pseudo-random row lengths in `0..max_len`.
///
/// Uses a fixed linear congruential sequence so benchmarks and tests see
/// the same layout on every run.
pub fn pseudo_random_lengths(rows: usize, max_len: usize, seed: u64) -> Vec<usize> {
    let mut state = seed;
    (0..rows)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            if max_len == 0 {
                0
            } else {
                ((state >> 33) as usize) % max_len
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_fixture_paths_agree() {
        assert_eq!(RaggedArray::from_rows(mixed_rows()).unwrap(), mixed_array());
    }

    #[test]
    fn staircase_lengths() {
        let rows = staircase_rows(4, 0.5f32);
        let lens: Vec<_> = rows.iter().map(Vec::len).collect();
        assert_eq!(lens, vec![0, 1, 2, 3]);
    }

    #[test]
    fn pseudo_random_lengths_are_deterministic() {
        let a = pseudo_random_lengths(32, 10, 7);
        assert_eq!(a, pseudo_random_lengths(32, 10, 7));
        assert!(a.iter().all(|&l| l < 10));
        assert!(pseudo_random_lengths(4, 0, 7).iter().all(|&l| l == 0));
    }
}
