//! Core types and traits for ragged arrays.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions shared by every container in the workspace: the
//! numeric [`Element`] trait, the [`RaggedError`] type, the row access
//! traits, and pluggable element comparison.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod element;
pub mod error;
pub mod traits;

pub use compare::{
    divergences, first_divergence, rows_eq_with, Bitwise, Comparator, Divergence,
    DivergenceReport, Exact, Tolerance,
};
pub use element::Element;
pub use error::{MalformedOffsets, RaggedError};
pub use traits::{RowSource, RowSourceMut, StructuralEq};
