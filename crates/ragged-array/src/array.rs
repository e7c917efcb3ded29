//! The packed ragged array container.

use std::ops::{Index, IndexMut, Range};

use ragged_core::{Element, Exact, RaggedError, RowSource, RowSourceMut, StructuralEq};

use crate::builder::RaggedBuilder;
use crate::config::BuilderConfig;
use crate::iter::{Rows, RowsMut};
use crate::offsets;

/// A sequence of variable-length rows packed into one flat buffer.
///
/// Holds an offsets table of `len() + 1` entries and a flat `values` buffer
/// of `offsets[len()]` elements. Invariants (checked at construction):
///
/// - `offsets[0] == 0`
/// - `offsets` is non-decreasing
/// - `offsets[len()] == values.len()`
///
/// # Views
///
/// [`get`](Self::get) and [`rows`](Self::rows) return `&[T]` windows into the
/// flat buffer; [`get_mut`](Self::get_mut) and [`rows_mut`](Self::rows_mut)
/// return `&mut [T]`. Writes through a mutable view are writes to the
/// container. The borrow checker rules out iterating while replacing rows.
///
/// # Equality
///
/// `==` compares logical rows with `PartialEq`, not raw buffers. Use
/// [`StructuralEq::eq_with`] for a custom element comparator.
#[derive(Clone, Debug)]
pub struct RaggedArray<T> {
    /// Row boundaries into `values`.
    offsets: Vec<u32>,
    /// All rows, concatenated.
    values: Vec<T>,
}

// Compile-time assertion: RaggedArray must be Send + Sync for Send + Sync elements.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<RaggedArray<f32>>();
};

impl<T: Element> RaggedArray<T> {
    /// Adopt a pre-built offsets table and flat buffer without copying.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::MalformedInput`] if `offsets` is empty, does
    /// not start at zero, decreases, or does not end at `values.len()`.
    pub fn new(offsets: Vec<u32>, values: Vec<T>) -> Result<Self, RaggedError> {
        offsets::validate(&offsets, values.len())?;
        Ok(Self { offsets, values })
    }

    /// Pack a sequence of rows into a new array.
    ///
    /// Offsets are prefix sums of the row lengths; each row is copied into
    /// its slot in iteration order. One pass over all elements.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::MalformedInput`] if the total element count
    /// exceeds `u32::MAX`.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, RaggedError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        let mut builder = RaggedBuilder::new();
        builder.extend_rows(rows)?;
        Ok(builder.build())
    }

    /// Allocate rows of the given lengths, every element set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::MalformedInput`] if the total element count
    /// exceeds `u32::MAX`.
    pub fn from_lengths<I>(lengths: I, fill: T) -> Result<Self, RaggedError>
    where
        I: IntoIterator<Item = usize>,
    {
        let offsets = offsets::from_lengths(lengths)?;
        let total = offsets.last().copied().unwrap_or(0) as usize;
        Ok(Self {
            offsets,
            values: vec![fill; total],
        })
    }

    /// An array with zero rows.
    pub fn empty() -> Self {
        Self {
            offsets: vec![0],
            values: Vec::new(),
        }
    }

    /// Assemble from buffers the caller has already validated.
    pub(crate) fn from_validated(offsets: Vec<u32>, values: Vec<T>) -> Self {
        debug_assert_eq!(offsets::validate(&offsets, values.len()), Ok(()));
        Self { offsets, values }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns `true` if the array has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of elements across all rows.
    pub fn element_count(&self) -> usize {
        self.values.len()
    }

    /// Length of row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::IndexOutOfBounds`] if `index >= len()`.
    pub fn row_len(&self, index: usize) -> Result<usize, RaggedError> {
        self.span(index).map(|r| r.len())
    }

    /// Borrow row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::IndexOutOfBounds`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&[T], RaggedError> {
        let range = self.span(index)?;
        Ok(&self.values[range])
    }

    /// Borrow row `index`, or `None` if it does not exist.
    pub fn try_get(&self, index: usize) -> Option<&[T]> {
        offsets::span(&self.offsets, index).map(|range| &self.values[range])
    }

    /// Mutably borrow row `index`.
    ///
    /// The row's length cannot change; only its elements can.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::IndexOutOfBounds`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut [T], RaggedError> {
        let range = self.span(index)?;
        Ok(&mut self.values[range])
    }

    /// Overwrite row `index` with `values`, element by element.
    ///
    /// No other row and no offset is touched. On error the array is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::IndexOutOfBounds`] if `index >= len()`, or
    /// [`RaggedError::RowLengthMismatch`] if `values.len()` differs from the
    /// existing row length.
    pub fn set(&mut self, index: usize, values: &[T]) -> Result<(), RaggedError> {
        let range = self.span(index)?;
        if range.len() != values.len() {
            return Err(RaggedError::RowLengthMismatch {
                row: index,
                expected: range.len(),
                actual: values.len(),
            });
        }
        self.values[range].copy_from_slice(values);
        Ok(())
    }

    /// Iterate over rows in ascending index order.
    pub fn rows(&self) -> Rows<'_, T> {
        Rows::new(&self.offsets, &self.values)
    }

    /// Iterate over mutable rows in ascending index order.
    pub fn rows_mut(&mut self) -> RowsMut<'_, T> {
        RowsMut::new(&self.offsets, &mut self.values)
    }

    /// The offsets table (`len() + 1` entries).
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// The flat buffer holding every row back to back.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Release the offsets table and flat buffer.
    pub fn into_parts(self) -> (Vec<u32>, Vec<T>) {
        (self.offsets, self.values)
    }

    /// Memory held by both buffers in bytes, spare capacity included.
    ///
    /// Arrays packed by [`from_rows`](Self::from_rows) or a builder hold no
    /// spare capacity. Buffers adopted through [`new`](Self::new) keep
    /// whatever the caller reserved.
    pub fn memory_bytes(&self) -> usize {
        self.offsets.capacity() * std::mem::size_of::<u32>()
            + self.values.capacity() * std::mem::size_of::<T>()
    }

    fn span(&self, index: usize) -> Result<Range<usize>, RaggedError> {
        offsets::span(&self.offsets, index).ok_or(RaggedError::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }
}

impl<T: Element> Default for RaggedArray<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Element> RowSource<T> for RaggedArray<T> {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn row(&self, index: usize) -> Option<&[T]> {
        self.try_get(index)
    }
}

impl<T: Element> RowSourceMut<T> for RaggedArray<T> {
    fn row_mut(&mut self, index: usize) -> Option<&mut [T]> {
        self.get_mut(index).ok()
    }
}

impl<T: Element> PartialEq for RaggedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_with(other, Exact)
    }
}

impl<T: Element + Eq> Eq for RaggedArray<T> {}

impl<T: Element> Index<usize> for RaggedArray<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &[T] {
        match self.get(index) {
            Ok(row) => row,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Element> IndexMut<usize> for RaggedArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut [T] {
        match self.get_mut(index) {
            Ok(row) => row,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, T: Element> IntoIterator for &'a RaggedArray<T> {
    type Item = &'a [T];
    type IntoIter = Rows<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows()
    }
}

impl<'a, T: Element> IntoIterator for &'a mut RaggedArray<T> {
    type Item = &'a mut [T];
    type IntoIter = RowsMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows_mut()
    }
}

impl<T: Element> TryFrom<Vec<Vec<T>>> for RaggedArray<T> {
    type Error = RaggedError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::try_from(rows.as_slice())
    }
}

impl<T: Element> TryFrom<&[Vec<T>]> for RaggedArray<T> {
    type Error = RaggedError;

    fn try_from(rows: &[Vec<T>]) -> Result<Self, Self::Error> {
        let mut builder = RaggedBuilder::with_config(BuilderConfig::for_rows(rows));
        builder.extend_rows(rows)?;
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragged_core::{MalformedOffsets, Tolerance};

    fn sample() -> RaggedArray<i32> {
        RaggedArray::from_rows([vec![1, 2, 3], vec![], vec![4]]).unwrap()
    }

    #[test]
    fn from_rows_layout() {
        let arr = sample();
        assert_eq!(arr.offsets(), &[0, 3, 3, 4]);
        assert_eq!(arr.values(), &[1, 2, 3, 4]);
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.get(1).unwrap(), &[] as &[i32]);
        assert_eq!(arr.get(2).unwrap(), &[4]);
    }

    #[test]
    fn new_adopts_valid_buffers() {
        let arr = RaggedArray::new(vec![0, 2, 5], vec![1u8, 2, 3, 4, 5]).unwrap();
        assert_eq!(arr.get(0).unwrap(), &[1, 2]);
        assert_eq!(arr.get(1).unwrap(), &[3, 4, 5]);
    }

    #[test]
    fn new_rejects_malformed_offsets() {
        let err = RaggedArray::new(vec![0, 3, 2], vec![0.0f32; 2]).unwrap_err();
        assert_eq!(
            err,
            RaggedError::MalformedInput {
                reason: MalformedOffsets::Decreasing {
                    index: 1,
                    previous: 3,
                    next: 2,
                },
            }
        );
        assert!(RaggedArray::<f32>::new(vec![], vec![]).is_err());
        assert!(RaggedArray::new(vec![0, 2], vec![1.0f32]).is_err());
    }

    #[test]
    fn empty_array() {
        let arr = RaggedArray::<f64>::empty();
        assert_eq!(arr.len(), 0);
        assert!(arr.is_empty());
        assert_eq!(arr.offsets(), &[0]);
        assert_eq!(arr.rows().count(), 0);
        assert_eq!(arr, RaggedArray::default());
        assert_eq!(arr, RaggedArray::from_rows(Vec::<Vec<f64>>::new()).unwrap());
    }

    #[test]
    fn get_out_of_bounds() {
        let arr = sample();
        assert_eq!(
            arr.get(3),
            Err(RaggedError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(arr.try_get(3), None);
        assert!(arr.row_len(usize::MAX).is_err());
    }

    #[test]
    fn get_mut_writes_through() {
        let mut arr = sample();
        arr.get_mut(0).unwrap()[1] = 20;
        assert_eq!(arr.get(0).unwrap(), &[1, 20, 3]);
        assert_eq!(arr.values(), &[1, 20, 3, 4]);
    }

    #[test]
    fn set_replaces_only_target_row() {
        let mut arr = sample();
        arr.set(0, &[7, 8, 9]).unwrap();
        assert_eq!(arr.get(0).unwrap(), &[7, 8, 9]);
        assert_eq!(arr.get(2).unwrap(), &[4]);
        assert_eq!(arr.offsets(), &[0, 3, 3, 4]);
    }

    #[test]
    fn set_empty_row() {
        let mut arr = sample();
        arr.set(1, &[]).unwrap();
        assert_eq!(arr, sample());
    }

    #[test]
    fn set_length_mismatch_leaves_array_unchanged() {
        let mut arr = sample();
        let err = arr.set(0, &[1, 2]).unwrap_err();
        assert_eq!(
            err,
            RaggedError::RowLengthMismatch {
                row: 0,
                expected: 3,
                actual: 2,
            }
        );
        assert_eq!(arr.get(0).unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn set_out_of_bounds_checked_before_length() {
        let mut arr = sample();
        assert_eq!(
            arr.set(3, &[]),
            Err(RaggedError::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn clone_is_independent() {
        let original = sample();
        let mut copy = original.clone();
        copy.set(0, &[0, 0, 0]).unwrap();
        assert_eq!(original.get(0).unwrap(), &[1, 2, 3]);
        assert_eq!(copy.get(0).unwrap(), &[0, 0, 0]);
    }

    #[test]
    fn equality_across_construction_paths() {
        let direct = RaggedArray::new(vec![0, 3, 3, 4], vec![1, 2, 3, 4]).unwrap();
        assert_eq!(direct, sample());
        assert!(direct.eq_with(&sample(), Exact));
        assert!(direct.eq_with(&vec![vec![1, 2, 3], vec![], vec![4]], Exact));
    }

    #[test]
    fn equality_distinguishes_row_boundaries() {
        let a = RaggedArray::from_rows([vec![1u8, 2], vec![3]]).unwrap();
        let b = RaggedArray::from_rows([vec![1u8], vec![2, 3]]).unwrap();
        assert_eq!(a.values(), b.values());
        assert_ne!(a, b);
    }

    #[test]
    fn equality_with_tolerance() {
        let a = RaggedArray::from_rows([vec![1.0f32, 2.0]]).unwrap();
        let b = RaggedArray::from_rows([vec![1.0001f32, 2.0]]).unwrap();
        assert_ne!(a, b);
        assert!(a.eq_with(&b, Tolerance::absolute(1e-3)));
    }

    #[test]
    fn from_lengths_fills() {
        let mut arr = RaggedArray::from_lengths([2, 0, 3], -1i16).unwrap();
        assert_eq!(arr.offsets(), &[0, 2, 2, 5]);
        assert!(arr.values().iter().all(|&v| v == -1));
        arr.set(2, &[1, 2, 3]).unwrap();
        assert_eq!(arr.get(2).unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn index_operators() {
        let mut arr = sample();
        assert_eq!(&arr[0], &[1, 2, 3]);
        arr[2][0] = 40;
        assert_eq!(&arr[2], &[40]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds_panics() {
        let arr = sample();
        let _ = &arr[5];
    }

    #[test]
    fn try_from_nested_vec() {
        let arr = RaggedArray::try_from(vec![vec![1u64], vec![2, 3]]).unwrap();
        assert_eq!(arr.offsets(), &[0, 1, 3]);
        let rows = vec![vec![1u64], vec![2, 3]];
        assert_eq!(RaggedArray::try_from(rows.as_slice()).unwrap(), arr);
    }

    #[test]
    fn into_parts_round_trip() {
        let (offsets, values) = sample().into_parts();
        assert_eq!(RaggedArray::new(offsets, values).unwrap(), sample());
    }

    #[test]
    fn memory_bytes_counts_both_buffers() {
        let arr = RaggedArray::from_rows([vec![0.0f64; 3], vec![0.0; 2]]).unwrap();
        assert_eq!(arr.memory_bytes(), 3 * 4 + 5 * 8);
        assert_eq!(arr.element_count(), 5);
    }

    #[test]
    fn memory_bytes_includes_adopted_slack() {
        let mut values = Vec::with_capacity(64);
        values.extend_from_slice(&[1u32, 2, 3]);
        let arr = RaggedArray::new(vec![0, 3], values).unwrap();
        assert!(arr.memory_bytes() >= 2 * 4 + 64 * 4);
    }

    #[test]
    fn from_rows_holds_no_spare_capacity() {
        let small = sample();
        assert_eq!(small.values.capacity(), small.values.len());
        assert_eq!(small.offsets.capacity(), small.offsets.len());
        assert_eq!(small.memory_bytes(), 4 * 4 + 4 * 4);

        let big = RaggedArray::from_rows((0..100_000).map(|i| vec![i as u16; 3])).unwrap();
        assert_eq!(big.values.capacity(), 300_000);
        assert_eq!(big.offsets.capacity(), 100_001);
    }

    #[test]
    fn from_lengths_rejects_overflow() {
        let err = RaggedArray::from_lengths([u32::MAX as usize, 1], 0u8).unwrap_err();
        assert_eq!(
            err,
            RaggedError::MalformedInput {
                reason: MalformedOffsets::OffsetOverflow {
                    total: u32::MAX as usize + 1,
                },
            }
        );
    }

    #[test]
    fn row_source_impl() {
        let arr = sample();
        assert_eq!(arr.row_count(), 3);
        assert_eq!(arr.row(0), Some(&[1, 2, 3][..]));
        assert_eq!(arr.row(3), None);
    }
}
