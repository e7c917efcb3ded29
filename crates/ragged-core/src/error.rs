//! Error types for ragged array construction and access.

use std::error::Error;
use std::fmt;

/// Why an offsets table was rejected at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedOffsets {
    /// The offsets table has no entries. Even an empty array needs `[0]`.
    Empty,
    /// `offsets[0]` is not zero.
    NonZeroStart {
        /// The value found at `offsets[0]`.
        first: u32,
    },
    /// `offsets[index] > offsets[index + 1]`.
    Decreasing {
        /// Position of the first offending pair.
        index: usize,
        /// `offsets[index]`.
        previous: u32,
        /// `offsets[index + 1]`.
        next: u32,
    },
    /// The final offset does not equal the flat buffer length.
    LengthMismatch {
        /// `offsets[n]`.
        last: u32,
        /// Length of the flat buffer.
        array_len: usize,
    },
    /// The total element count does not fit in a `u32` offset.
    OffsetOverflow {
        /// Total number of elements requested.
        total: usize,
    },
}

impl fmt::Display for MalformedOffsets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "offsets table is empty"),
            Self::NonZeroStart { first } => {
                write!(f, "offsets must start at 0, found {first}")
            }
            Self::Decreasing {
                index,
                previous,
                next,
            } => {
                write!(
                    f,
                    "offsets decrease at {index}: {previous} followed by {next}"
                )
            }
            Self::LengthMismatch { last, array_len } => {
                write!(
                    f,
                    "final offset {last} does not match array length {array_len}"
                )
            }
            Self::OffsetOverflow { total } => {
                write!(f, "{total} elements exceed the u32 offset range")
            }
        }
    }
}

impl Error for MalformedOffsets {}

/// Errors returned by ragged array operations.
///
/// All variants are caller contract violations. Operations that fail
/// leave the container unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RaggedError {
    /// A row index outside `[0, len)`.
    IndexOutOfBounds {
        /// The requested row.
        index: usize,
        /// Number of rows in the container.
        len: usize,
    },
    /// A replacement row whose length differs from the existing span.
    RowLengthMismatch {
        /// The row being replaced.
        row: usize,
        /// Length of the existing row.
        expected: usize,
        /// Length of the supplied values.
        actual: usize,
    },
    /// The offsets/array pair violates the layout invariants.
    MalformedInput {
        /// The violated invariant.
        reason: MalformedOffsets,
    },
}

impl fmt::Display for RaggedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "row index {index} out of bounds for length {len}")
            }
            Self::RowLengthMismatch {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "row {row} has length {expected}, replacement has length {actual}"
                )
            }
            Self::MalformedInput { reason } => write!(f, "malformed input: {reason}"),
        }
    }
}

impl Error for RaggedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MalformedInput { reason } => Some(reason),
            _ => None,
        }
    }
}

impl From<MalformedOffsets> for RaggedError {
    fn from(reason: MalformedOffsets) -> Self {
        Self::MalformedInput { reason }
    }
}
