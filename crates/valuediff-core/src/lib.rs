//! Structural diff engine for tree-shaped documents.
//!
//! Compares two decoded JSON-like documents (nested mappings, ordered
//! sequences, scalars) and produces a structured diff describing every
//! addition, removal, and change. Rendering the diff as text lives in the
//! companion report crate.
//!
//! # Key Types
//!
//! - [`TreeDiff`] / [`Change`] -- Mapping-level diff keyed by property name
//! - [`SeqDiff`] / [`SeqChange`] -- Ordered element-level sequence alignment
//! - [`diff_documents`] -- Reader-facing entry point (decode both, compare)
//! - [`diff_mappings`] / [`align_sequences`] -- The comparison algorithms
//!
//! All operations are pure functions over immutable inputs; the crate does
//! no I/O beyond decoding the two input streams and holds no global state,
//! so independent comparisons may run concurrently.

pub mod compare;
pub mod diff;
pub mod document;
pub mod error;
pub mod sequence;

pub use compare::{diff_mappings, CompareOptions};
pub use diff::{Change, SeqChange, SeqDiff, TreeDiff};
pub use document::{decode_document, diff_documents};
pub use error::{DiffError, DiffResult};
pub use sequence::align_sequences;
