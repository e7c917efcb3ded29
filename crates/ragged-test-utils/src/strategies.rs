//! `proptest` strategies for rows and ragged arrays.

use proptest::prelude::*;
use ragged_array::RaggedArray;

/// Up to `max_rows` rows of up to `max_len` small integers each.
pub fn arb_rows(max_rows: usize, max_len: usize) -> impl Strategy<Value = Vec<Vec<i32>>> {
    prop::collection::vec(prop::collection::vec(-1000i32..1000, 0..=max_len), 0..=max_rows)
}

/// Rows of finite `f64` values.
pub fn arb_float_rows(max_rows: usize, max_len: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(
        prop::collection::vec(-1.0e6f64..1.0e6, 0..=max_len),
        0..=max_rows,
    )
}

/// A ragged array together with the rows it was packed from.
pub fn arb_array(
    max_rows: usize,
    max_len: usize,
) -> impl Strategy<Value = (RaggedArray<i32>, Vec<Vec<i32>>)> {
    arb_rows(max_rows, max_len).prop_map(|rows| {
        let arr = RaggedArray::from_rows(&rows).expect("small rows never overflow u32 offsets");
        (arr, rows)
    })
}

/// A non-empty array, a valid row index into it, and a replacement row of
/// that row's length.
pub fn arb_array_with_replacement(
    max_rows: usize,
    max_len: usize,
) -> impl Strategy<Value = (RaggedArray<i32>, usize, Vec<i32>)> {
    arb_rows(max_rows.max(1), max_len)
        .prop_filter("need at least one row", |rows| !rows.is_empty())
        .prop_flat_map(|rows| {
            let count = rows.len();
            (Just(rows), 0..count)
        })
        .prop_flat_map(|(rows, index)| {
            let len = rows[index].len();
            (
                Just(rows),
                Just(index),
                prop::collection::vec(-1000i32..1000, len),
            )
        })
        .prop_map(|(rows, index, replacement)| {
            let arr = RaggedArray::from_rows(&rows).expect("small rows never overflow u32 offsets");
            (arr, index, replacement)
        })
}
