//! Offsets table validation and arithmetic.
//!
//! An offsets table for `n` rows has `n + 1` entries, starts at zero, never
//! decreases, and ends at the flat buffer length. Offsets are `u32`, so a
//! single container holds at most `u32::MAX` elements.

use std::ops::Range;

use ragged_core::MalformedOffsets;

/// Check an offsets table against the flat buffer it indexes.
///
/// Checks run in order: non-empty, zero start, non-decreasing, final
/// offset equals `array_len`. The first violation is returned.
pub fn validate(offsets: &[u32], array_len: usize) -> Result<(), MalformedOffsets> {
    let (&first, _) = offsets.split_first().ok_or(MalformedOffsets::Empty)?;
    if first != 0 {
        return Err(MalformedOffsets::NonZeroStart { first });
    }

    if let Some(index) = offsets.windows(2).position(|w| w[0] > w[1]) {
        return Err(MalformedOffsets::Decreasing {
            index,
            previous: offsets[index],
            next: offsets[index + 1],
        });
    }

    let last = offsets[offsets.len() - 1];
    if last as usize != array_len {
        return Err(MalformedOffsets::LengthMismatch { last, array_len });
    }
    Ok(())
}

/// The offset that ends a row of `len` elements starting at `start`.
///
/// Fails with [`MalformedOffsets::OffsetOverflow`] when the end does not
/// fit in a `u32`.
pub fn row_end(start: usize, len: usize) -> Result<u32, MalformedOffsets> {
    let total = start.saturating_add(len);
    u32::try_from(total).map_err(|_| MalformedOffsets::OffsetOverflow { total })
}

/// Build an offsets table from row lengths.
pub fn from_lengths<I>(lengths: I) -> Result<Vec<u32>, MalformedOffsets>
where
    I: IntoIterator<Item = usize>,
{
    let lengths = lengths.into_iter();
    let mut offsets = Vec::with_capacity(lengths.size_hint().0 + 1);
    offsets.push(0u32);
    let mut cursor = 0usize;
    for len in lengths {
        let end = row_end(cursor, len)?;
        offsets.push(end);
        cursor = end as usize;
    }
    offsets.shrink_to_fit();
    Ok(offsets)
}

/// The flat-buffer range of row `index`, or `None` past the last row.
///
/// Assumes `offsets` has already been validated.
pub(crate) fn span(offsets: &[u32], index: usize) -> Option<Range<usize>> {
    let start = *offsets.get(index)?;
    let end = *offsets.get(index.checked_add(1)?)?;
    Some(start as usize..end as usize)
}
