//! Incremental construction of ragged arrays.

use ragged_core::{Element, RaggedError};

use crate::array::RaggedArray;
use crate::config::BuilderConfig;
use crate::offsets;

/// Appends rows one at a time, then freezes them into a [`RaggedArray`].
///
/// The builder maintains the offsets invariants after every push, so
/// [`build`](Self::build) cannot fail.
#[derive(Clone, Debug)]
pub struct RaggedBuilder<T> {
    offsets: Vec<u32>,
    values: Vec<T>,
}

impl<T: Element> RaggedBuilder<T> {
    /// Create a builder with default capacities.
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// Create a builder with buffers reserved per `config`.
    pub fn with_config(config: BuilderConfig) -> Self {
        let mut offsets = Vec::with_capacity(config.row_capacity.saturating_add(1));
        offsets.push(0);
        Self {
            offsets,
            values: Vec::with_capacity(config.element_capacity),
        }
    }

    /// Append one row.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::MalformedInput`] if the running element count
    /// would exceed `u32::MAX`. The builder is unchanged on error.
    pub fn push_row(&mut self, row: &[T]) -> Result<(), RaggedError> {
        let start = self.offsets.last().copied().unwrap_or(0) as usize;
        let end = offsets::row_end(start, row.len())?;
        self.values.extend_from_slice(row);
        self.offsets.push(end);
        Ok(())
    }

    /// Append every row from `rows`, in order.
    ///
    /// Stops at the first row that would overflow; rows before it remain
    /// appended.
    ///
    /// # Errors
    ///
    /// Same as [`push_row`](Self::push_row).
    pub fn extend_rows<I, R>(&mut self, rows: I) -> Result<(), RaggedError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        for row in rows {
            self.push_row(row.as_ref())?;
        }
        Ok(())
    }

    /// Number of rows pushed so far.
    pub fn row_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of elements pushed so far.
    pub fn element_count(&self) -> usize {
        self.values.len()
    }

    /// Freeze the pushed rows into an array.
    ///
    /// Spare capacity left over from the reservation is released.
    pub fn build(mut self) -> RaggedArray<T> {
        self.offsets.shrink_to_fit();
        self.values.shrink_to_fit();
        RaggedArray::from_validated(self.offsets, self.values)
    }
}

impl<T: Element> Default for RaggedBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
