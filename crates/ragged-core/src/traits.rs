//! Core abstraction traits for row access and structural comparison.

use crate::compare::{rows_eq_with, Comparator};

/// Read-only, index-based access to a sequence of rows.
///
/// Implemented by the packed ragged container and by plain nested vectors,
/// so the two can be compared and consumed interchangeably. Returns `None`
/// if the index is past the last row.
pub trait RowSource<T> {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Borrow row `index` as a slice.
    fn row(&self, index: usize) -> Option<&[T]>;
}

/// Mutable access to the elements of existing rows.
///
/// Row lengths are fixed: implementors hand out windows over storage that
/// already exists and never reflow neighbouring rows.
pub trait RowSourceMut<T>: RowSource<T> {
    /// Borrow row `index` mutably.
    fn row_mut(&mut self, index: usize) -> Option<&mut [T]>;
}

/// Element-wise equality against another row source under a caller-supplied
/// comparator.
///
/// Two sources are equal iff they have the same row count and every pair of
/// corresponding rows has the same length and compares equal element by
/// element. Physical layout is irrelevant.
pub trait StructuralEq<T> {
    /// Compare `self` against `other` using `cmp` for each element pair.
    fn eq_with<O, C>(&self, other: &O, cmp: C) -> bool
    where
        O: RowSource<T> + ?Sized,
        C: Comparator<T>;
}

impl<T, S> StructuralEq<T> for S
where
    S: RowSource<T> + ?Sized,
{
    fn eq_with<O, C>(&self, other: &O, cmp: C) -> bool
    where
        O: RowSource<T> + ?Sized,
        C: Comparator<T>,
    {
        rows_eq_with(self, other, cmp)
    }
}

impl<T> RowSource<T> for [Vec<T>] {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn row(&self, index: usize) -> Option<&[T]> {
        self.get(index).map(|r| r.as_slice())
    }
}

impl<T> RowSourceMut<T> for [Vec<T>] {
    fn row_mut(&mut self, index: usize) -> Option<&mut [T]> {
        self.get_mut(index).map(|r| r.as_mut_slice())
    }
}

impl<T> RowSource<T> for Vec<Vec<T>> {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn row(&self, index: usize) -> Option<&[T]> {
        self.get(index).map(|r| r.as_slice())
    }
}

impl<T> RowSourceMut<T> for Vec<Vec<T>> {
    fn row_mut(&mut self, index: usize) -> Option<&mut [T]> {
        self.get_mut(index).map(|r| r.as_mut_slice())
    }
}

impl<T> RowSource<T> for [&[T]] {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn row(&self, index: usize) -> Option<&[T]> {
        self.get(index).copied()
    }
}
