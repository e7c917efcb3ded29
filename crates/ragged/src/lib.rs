//! Ragged: compact CSR-style containers for variable-length numeric rows.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the `ragged` sub-crates. For most users, adding `ragged` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ragged::prelude::*;
//!
//! let mut arr = RaggedArray::from_rows([vec![1.0f32, 2.0, 3.0], vec![], vec![4.0]]).unwrap();
//! assert_eq!(arr.len(), 3);
//! assert_eq!(arr.offsets(), &[0, 3, 3, 4]);
//! assert!(arr.get(1).unwrap().is_empty());
//!
//! // Rows are replaced in place; the length must match.
//! arr.set(0, &[10.0, 20.0, 30.0]).unwrap();
//! assert!(matches!(
//!     arr.set(2, &[1.0, 2.0]),
//!     Err(RaggedError::RowLengthMismatch { expected: 1, actual: 2, .. })
//! ));
//!
//! // Structural equality with a pluggable comparator.
//! let nested = vec![vec![10.0f32, 20.0, 30.0001], vec![], vec![4.0]];
//! assert!(arr.eq_with(&nested, Tolerance::absolute(1e-3)));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `ragged-array` | `RaggedArray`, row iterators, builder, offsets validation |
//! | [`types`] | `ragged-core` | `Element`, errors, row access traits, comparators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The packed container and its helpers (`ragged-array`).
///
/// Most users only need [`array::RaggedArray`]; it is also available in
/// the [`prelude`].
pub use ragged_array as array;

/// Element trait, errors, row access traits, and comparators (`ragged-core`).
pub use ragged_core as types;

/// Common imports for typical usage.
///
/// ```rust
/// use ragged::prelude::*;
/// ```
pub mod prelude {
    // Container
    pub use ragged_array::{BuilderConfig, RaggedArray, RaggedBuilder, Rows, RowsMut};

    // Core types and traits
    pub use ragged_core::{Element, RowSource, RowSourceMut, StructuralEq};

    // Comparison
    pub use ragged_core::{Bitwise, Comparator, Divergence, Exact, Tolerance};

    // Errors
    pub use ragged_core::{MalformedOffsets, RaggedError};
}
