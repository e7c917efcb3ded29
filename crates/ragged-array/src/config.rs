//! Builder configuration parameters.

/// Pre-sizing hints for [`RaggedBuilder`](crate::RaggedBuilder).
///
/// Capacities are reservations only; a builder grows past them as needed.
/// Values are read once at builder creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Expected number of rows.
    ///
    /// Default: 16. The offsets buffer reserves `row_capacity + 1` entries.
    pub row_capacity: usize,

    /// Expected total number of elements across all rows.
    ///
    /// Default: 256.
    pub element_capacity: usize,
}

impl BuilderConfig {
    /// Default expected row count.
    pub const DEFAULT_ROW_CAPACITY: usize = 16;

    /// Default expected element count.
    pub const DEFAULT_ELEMENT_CAPACITY: usize = 256;

    /// Create a config with explicit capacities.
    pub fn new(row_capacity: usize, element_capacity: usize) -> Self {
        Self {
            row_capacity,
            element_capacity,
        }
    }

    /// Exact capacities for packing `rows`.
    pub fn for_rows<T, R: AsRef<[T]>>(rows: &[R]) -> Self {
        Self {
            row_capacity: rows.len(),
            element_capacity: rows.iter().map(|r| r.as_ref().len()).sum(),
        }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROW_CAPACITY, Self::DEFAULT_ELEMENT_CAPACITY)
    }
}
