//! Test utilities and mock types for ragged development.
//!
//! Provides a mock implementation of [`RowSource`]/[`RowSourceMut`] backed
//! by nested vectors, canned fixtures, and `proptest` strategies for rows
//! and arrays (see [`strategies`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

use std::cell::Cell;

use ragged_core::{RowSource, RowSourceMut};

/// Mock implementation of [`RowSource`] and [`RowSourceMut`].
///
/// Backed by a `Vec<Vec<T>>` for flexible test setup. Counts row reads so
/// tests can assert that comparisons short-circuit.
pub struct MockRows<T> {
    rows: Vec<Vec<T>>,
    reads: Cell<usize>,
}

impl<T> MockRows<T> {
    pub fn new(rows: Vec<Vec<T>>) -> Self {
        Self {
            rows,
            reads: Cell::new(0),
        }
    }

    /// Number of successful `row()` calls so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Read back the current rows for test assertions.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }
}

impl<T> Default for MockRows<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> RowSource<T> for MockRows<T> {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> Option<&[T]> {
        let row = self.rows.get(index)?;
        self.reads.set(self.reads.get() + 1);
        Some(row.as_slice())
    }
}

impl<T> RowSourceMut<T> for MockRows<T> {
    fn row_mut(&mut self, index: usize) -> Option<&mut [T]> {
        self.rows.get_mut(index).map(|r| r.as_mut_slice())
    }
}
