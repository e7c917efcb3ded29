//! Row iterators over a [`RaggedArray`](crate::RaggedArray).
//!
//! Both iterators walk the offsets table pairwise and hand out windows into
//! the flat buffer. [`Rows`] is `Clone`, so a partially consumed cursor can
//! be forked and replayed from its current position.

use std::iter::FusedIterator;
use std::slice::Windows;

/// Iterator over the rows of a ragged array, as shared slices.
#[derive(Clone, Debug)]
pub struct Rows<'a, T> {
    bounds: Windows<'a, u32>,
    values: &'a [T],
}

impl<'a, T> Rows<'a, T> {
    pub(crate) fn new(offsets: &'a [u32], values: &'a [T]) -> Self {
        Self {
            bounds: offsets.windows(2),
            values,
        }
    }

    fn slice(&self, w: &[u32]) -> &'a [T] {
        &self.values[w[0] as usize..w[1] as usize]
    }
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        let w = self.bounds.next()?;
        Some(self.slice(w))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bounds.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let w = self.bounds.nth(n)?;
        Some(self.slice(w))
    }
}

impl<T> DoubleEndedIterator for Rows<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let w = self.bounds.next_back()?;
        Some(self.slice(w))
    }
}

impl<T> ExactSizeIterator for Rows<'_, T> {}

impl<T> FusedIterator for Rows<'_, T> {}

/// Iterator over the rows of a ragged array, as mutable slices.
///
/// `rest` always covers exactly the rows not yet yielded from either end,
/// so each step splits one row off the front or back.
#[derive(Debug)]
pub struct RowsMut<'a, T> {
    bounds: Windows<'a, u32>,
    rest: &'a mut [T],
}

impl<'a, T> RowsMut<'a, T> {
    pub(crate) fn new(offsets: &'a [u32], values: &'a mut [T]) -> Self {
        Self {
            bounds: offsets.windows(2),
            rest: values,
        }
    }
}

impl<'a, T> Iterator for RowsMut<'a, T> {
    type Item = &'a mut [T];

    fn next(&mut self) -> Option<Self::Item> {
        let w = self.bounds.next()?;
        let len = (w[1] - w[0]) as usize;
        let rest = std::mem::take(&mut self.rest);
        let (row, tail) = rest.split_at_mut(len);
        self.rest = tail;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bounds.size_hint()
    }
}

impl<T> DoubleEndedIterator for RowsMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let w = self.bounds.next_back()?;
        let len = (w[1] - w[0]) as usize;
        let rest = std::mem::take(&mut self.rest);
        let split = rest.len() - len;
        let (head, row) = rest.split_at_mut(split);
        self.rest = head;
        Some(row)
    }
}

impl<T> ExactSizeIterator for RowsMut<'_, T> {}

impl<T> FusedIterator for RowsMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::RaggedArray;

    fn sample() -> RaggedArray<u16> {
        RaggedArray::from_rows([vec![1, 2, 3], vec![], vec![4], vec![5, 6]]).unwrap()
    }

    #[test]
    fn rows_match_indexed_access() {
        let arr = sample();
        let rows: Vec<&[u16]> = arr.rows().collect();
        assert_eq!(rows.len(), arr.len());
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(*row, arr.get(i).unwrap());
        }
    }

    #[test]
    fn rows_is_restartable() {
        let arr = sample();
        let first: Vec<_> = arr.rows().collect();
        let second: Vec<_> = (&arr).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn cloned_cursor_replays_from_position() {
        let arr = sample();
        let mut rows = arr.rows();
        rows.next();
        let fork = rows.clone();
        assert_eq!(rows.collect::<Vec<_>>(), fork.collect::<Vec<_>>());
    }

    #[test]
    fn rows_exact_size_and_reverse() {
        let arr = sample();
        let mut rows = arr.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows.next_back(), Some(&[5u16, 6][..]));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.nth(1), Some(&[][..]));
        assert_eq!(rows.next(), Some(&[4u16][..]));
        assert_eq!(rows.next(), None);
        assert_eq!(rows.next(), None);
    }

    #[test]
    fn rows_mut_writes_through() {
        let mut arr = sample();
        for row in arr.rows_mut() {
            for v in row.iter_mut() {
                *v *= 10;
            }
        }
        assert_eq!(arr.values(), &[10, 20, 30, 40, 50, 60]);
        assert_eq!(arr.offsets(), &[0, 3, 3, 4, 6]);
    }

    #[test]
    fn rows_mut_from_both_ends() {
        let mut arr = sample();
        {
            let mut rows = arr.rows_mut();
            assert_eq!(rows.len(), 4);
            let last = rows.next_back().unwrap();
            last[0] = 50;
            let first = rows.next().unwrap();
            first[2] = 30;
            let third = rows.next_back().unwrap();
            assert_eq!(third, &[4]);
            let second = rows.next().unwrap();
            assert!(second.is_empty());
            assert!(rows.next().is_none());
            assert!(rows.next_back().is_none());
        }
        assert_eq!(arr.get(0).unwrap(), &[1, 2, 30]);
        assert_eq!(arr.get(3).unwrap(), &[50, 6]);
    }

    #[test]
    fn empty_array_yields_nothing() {
        let mut arr = RaggedArray::<f32>::empty();
        assert_eq!(arr.rows().next(), None);
        assert!(arr.rows_mut().next().is_none());
    }
}
