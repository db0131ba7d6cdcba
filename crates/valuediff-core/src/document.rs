//! Document loading and the reader-facing comparison entry point.
//!
//! The comparator itself never sees raw bytes: both inputs decode into
//! generic mappings first, and a decode failure on either side aborts the
//! comparison before it starts.

use std::io::Read;

use serde_json::{Map, Value};
use tracing::debug;

use crate::compare::{diff_mappings, CompareOptions};
use crate::diff::TreeDiff;
use crate::error::{DiffError, DiffResult};

/// Decode a document from a byte stream into a generic mapping.
///
/// The root of the document must be a mapping; any other root kind is
/// rejected even when well-formed.
pub fn decode_document(reader: impl Read) -> DiffResult<Map<String, Value>> {
    match serde_json::from_reader(reader)? {
        Value::Object(map) => Ok(map),
        _ => Err(DiffError::RootNotMapping),
    }
}

/// Compare two documents read from byte streams.
///
/// Decodes `expected` and `received`, then diffs them with default options.
/// A loader error on either side is propagated unchanged and no partial
/// diff is produced.
pub fn diff_documents(expected: impl Read, received: impl Read) -> DiffResult<TreeDiff> {
    let expected = decode_document(expected)?;
    let received = decode_document(received)?;

    let tree = diff_mappings(&expected, &received, CompareOptions::default());
    debug!(entries = tree.len(), "compared documents");

    Ok(tree)
}
