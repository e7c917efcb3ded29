//! Pluggable element comparison and row-level divergence reporting.
//!
//! Structural equality between row sources is decided element by element
//! through a [`Comparator`]. Three comparators ship with the crate:
//!
//! - [`Exact`]: `PartialEq` (so `NaN != NaN`, `0.0 == -0.0`).
//! - [`Bitwise`]: identical bit patterns (so a NaN equals itself).
//! - [`Tolerance`]: absolute/relative closeness after widening to `f64`.
//!
//! Any `Fn(&T, &T) -> bool` closure is also a comparator.
//!
//! When a boolean is not enough, [`first_divergence`] and [`divergences`]
//! locate where two sources differ.

use smallvec::SmallVec;

use crate::element::Element;
use crate::traits::RowSource;

/// Decides whether two elements are equal.
pub trait Comparator<T> {
    /// Returns `true` if `a` and `b` are considered equal.
    fn equal(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equal(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Equality via `PartialEq`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exact;

impl<T: PartialEq> Comparator<T> for Exact {
    fn equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Equality of raw bit patterns.
///
/// Matches byte-exact replay comparison: `NaN` payloads compare equal to
/// themselves and `0.0` differs from `-0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bitwise;

impl<T: Element> Comparator<T> for Bitwise {
    fn equal(&self, a: &T, b: &T) -> bool {
        a.bit_pattern() == b.bit_pattern()
    }
}

/// Numeric closeness: `|a - b| <= abs + rel * max(|a|, |b|)`.
///
/// Values are widened to `f64` first. Exactly-equal values (including
/// same-signed infinities) always match; `NaN` never does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    /// Absolute tolerance.
    pub abs: f64,
    /// Relative tolerance, scaled by the larger magnitude.
    pub rel: f64,
}

impl Tolerance {
    /// Absolute-only tolerance.
    pub fn absolute(abs: f64) -> Self {
        Self { abs, rel: 0.0 }
    }

    /// Relative-only tolerance.
    pub fn relative(rel: f64) -> Self {
        Self { abs: 0.0, rel }
    }
}

impl<T: Element> Comparator<T> for Tolerance {
    fn equal(&self, a: &T, b: &T) -> bool {
        let (a, b) = (a.to_f64(), b.to_f64());
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        let scale = a.abs().max(b.abs());
        diff <= self.abs + self.rel * scale
    }
}

/// A single point where two row sources differ.
#[derive(Clone, Debug, PartialEq)]
pub enum Divergence<T> {
    /// The sources have different row counts.
    RowCount {
        /// Rows in the left source.
        left: usize,
        /// Rows in the right source.
        right: usize,
    },
    /// A row has different lengths in the two sources.
    RowLength {
        /// The row index.
        row: usize,
        /// Length in the left source.
        left: usize,
        /// Length in the right source.
        right: usize,
    },
    /// A row within both row counts that only one source could read.
    MissingRow {
        /// The row index.
        row: usize,
        /// Whether the left source returned the row.
        left: bool,
        /// Whether the right source returned the row.
        right: bool,
    },
    /// An element pair rejected by the comparator.
    Element {
        /// The row index.
        row: usize,
        /// Position within the row.
        position: usize,
        /// Value in the left source.
        left: T,
        /// Value in the right source.
        right: T,
    },
}

/// Every divergence found between two row sources, in row order.
#[derive(Clone, Debug, PartialEq)]
pub struct DivergenceReport<T> {
    entries: SmallVec<[Divergence<T>; 4]>,
}

impl<T> DivergenceReport<T> {
    /// Returns `true` if the sources matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of divergences found.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over divergences in the order they were found.
    pub fn iter(&self) -> std::slice::Iter<'_, Divergence<T>> {
        self.entries.iter()
    }

    /// Divergences located in the given row.
    pub fn in_row(&self, row: usize) -> impl Iterator<Item = &Divergence<T>> + '_ {
        self.entries.iter().filter(move |d| match d {
            Divergence::RowCount { .. } => false,
            Divergence::RowLength { row: r, .. }
            | Divergence::MissingRow { row: r, .. }
            | Divergence::Element { row: r, .. } => *r == row,
        })
    }
}

impl<'a, T> IntoIterator for &'a DivergenceReport<T> {
    type Item = &'a Divergence<T>;
    type IntoIter = std::slice::Iter<'a, Divergence<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns `true` if `a` and `b` are structurally equal under `cmp`.
pub fn rows_eq_with<T, A, B, C>(a: &A, b: &B, cmp: C) -> bool
where
    A: RowSource<T> + ?Sized,
    B: RowSource<T> + ?Sized,
    C: Comparator<T>,
{
    if a.row_count() != b.row_count() {
        return false;
    }
    (0..a.row_count()).all(|i| match (a.row(i), b.row(i)) {
        (Some(ra), Some(rb)) => {
            ra.len() == rb.len() && ra.iter().zip(rb).all(|(x, y)| cmp.equal(x, y))
        }
        (None, None) => true,
        _ => false,
    })
}

/// Locate the first divergence between `a` and `b`, scanning rows in order.
///
/// A row count mismatch is reported before any row is inspected.
pub fn first_divergence<T, A, B, C>(a: &A, b: &B, cmp: C) -> Option<Divergence<T>>
where
    T: Copy,
    A: RowSource<T> + ?Sized,
    B: RowSource<T> + ?Sized,
    C: Comparator<T>,
{
    let mut found = None;
    scan(a, b, &cmp, &mut |d| {
        found = Some(d);
        false
    });
    found
}

/// Collect every divergence between `a` and `b`.
///
/// Mirrors byte-exact snapshot comparison: rows present in both sources are
/// compared over their common prefix, a length mismatch is recorded after
/// that row's element divergences, and a row count mismatch is recorded
/// first.
pub fn divergences<T, A, B, C>(a: &A, b: &B, cmp: C) -> DivergenceReport<T>
where
    T: Copy,
    A: RowSource<T> + ?Sized,
    B: RowSource<T> + ?Sized,
    C: Comparator<T>,
{
    let mut entries = SmallVec::new();
    scan(a, b, &cmp, &mut |d| {
        entries.push(d);
        true
    });
    DivergenceReport { entries }
}

/// Walk both sources, handing each divergence to `sink` until it returns `false`.
fn scan<T, A, B, C>(a: &A, b: &B, cmp: &C, sink: &mut dyn FnMut(Divergence<T>) -> bool)
where
    T: Copy,
    A: RowSource<T> + ?Sized,
    B: RowSource<T> + ?Sized,
    C: Comparator<T>,
{
    let (left_rows, right_rows) = (a.row_count(), b.row_count());
    if left_rows != right_rows
        && !sink(Divergence::RowCount {
            left: left_rows,
            right: right_rows,
        })
    {
        return;
    }

    for row in 0..left_rows.min(right_rows) {
        let (ra, rb) = match (a.row(row), b.row(row)) {
            (Some(ra), Some(rb)) => (ra, rb),
            (None, None) => continue,
            (ra, rb) => {
                let missing = Divergence::MissingRow {
                    row,
                    left: ra.is_some(),
                    right: rb.is_some(),
                };
                if !sink(missing) {
                    return;
                }
                continue;
            }
        };
        for (position, (x, y)) in ra.iter().zip(rb).enumerate() {
            if !cmp.equal(x, y)
                && !sink(Divergence::Element {
                    row,
                    position,
                    left: *x,
                    right: *y,
                })
            {
                return;
            }
        }
        if ra.len() != rb.len()
            && !sink(Divergence::RowLength {
                row,
                left: ra.len(),
                right: rb.len(),
            })
        {
            return;
        }
    }
}
