//! Packed CSR-style ragged arrays.
//!
//! A [`RaggedArray`] stores a sequence of variable-length numeric rows in one
//! flat buffer, indexed by a `u32` offsets table of length `rows + 1`:
//!
//! ```text
//! rows:     [1, 2, 3]  []  [4]
//! offsets:  0 ──────── 3 ─ 3 ─ 4
//! values:   [1, 2, 3, 4]
//! ```
//!
//! Row `i` is `values[offsets[i]..offsets[i + 1]]`. Rows are handed out as
//! borrowed slices into the flat buffer, never copies, so reads are O(1) and
//! in-place replacement ([`RaggedArray::set`]) is O(row length). Row lengths
//! are fixed after construction.
//!
//! # Construction paths
//!
//! - [`RaggedArray::new`]: adopt pre-built buffers after validating them.
//! - [`RaggedArray::from_rows`]: pack a sequence of rows in one pass.
//! - [`RaggedArray::from_lengths`]: pre-size rows, fill them later.
//! - [`RaggedBuilder`]: push rows incrementally.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod builder;
pub mod config;
pub mod iter;
pub mod offsets;

// Public re-exports for the primary API surface.
pub use array::RaggedArray;
pub use builder::RaggedBuilder;
pub use config::BuilderConfig;
pub use iter::{Rows, RowsMut};
