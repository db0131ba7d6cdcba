//! Diff result types: the tree of tagged changes produced by a comparison.
//!
//! A [`TreeDiff`] maps bare property names to [`Change`] entries; nested
//! containers that differ beneath an unchanged key carry their own sub-diff.
//! Sequence comparisons produce a [`SeqDiff`], an ordered list of tagged
//! elements that reconstructs the alignment between the two inputs.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// The result of comparing two mappings.
///
/// Entries are keyed by the bare property name; the change kind lives in the
/// [`Change`] variant, not in the key. An empty tree means the two inputs
/// were structurally identical (unless common entries were requested).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TreeDiff {
    /// The per-property changes, in key order.
    pub entries: BTreeMap<String, Change>,
}

impl TreeDiff {
    /// Create an empty tree diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if any entry records an actual difference.
    ///
    /// Differs from `!is_empty()` only when the comparison was asked to
    /// record unchanged properties as well.
    pub fn has_differences(&self) -> bool {
        self.entries
            .values()
            .any(|c| !matches!(c, Change::Unchanged(_)))
    }

    /// Number of added properties (shallow).
    pub fn additions(&self) -> usize {
        self.entries
            .values()
            .filter(|c| matches!(c, Change::Added(_)))
            .count()
    }

    /// Number of removed properties (shallow).
    pub fn removals(&self) -> usize {
        self.entries
            .values()
            .filter(|c| matches!(c, Change::Removed(_)))
            .count()
    }

    /// Number of changed properties (shallow).
    pub fn changes(&self) -> usize {
        self.entries
            .values()
            .filter(|c| matches!(c, Change::Changed { .. }))
            .count()
    }

    pub(crate) fn insert(&mut self, key: &str, change: Change) {
        self.entries.insert(key.to_string(), change);
    }
}

/// A single change to a named property.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Change {
    /// The property exists only in the received document.
    Added(Value),
    /// The property exists only in the expected document.
    Removed(Value),
    /// The property exists in both but with different kinds or unequal
    /// scalar values. Renders as a removed/added pair.
    Changed { expected: Value, received: Value },
    /// The property is identical on both sides. Only recorded when the
    /// comparison is asked to include common properties.
    Unchanged(Value),
    /// Both sides are mappings that differ somewhere beneath this key.
    NestedMap(TreeDiff),
    /// Both sides are sequences that differ somewhere beneath this key.
    NestedSeq(SeqDiff),
}

/// The result of aligning two sequences.
///
/// Item order is significant: it is the alignment itself, not just the set
/// of changes. A sequence diff over identical inputs holds one `Unchanged`
/// item per element.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SeqDiff {
    /// The aligned elements, in output order.
    pub items: Vec<SeqChange>,
}

impl SeqDiff {
    /// Create an empty sequence diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of aligned items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if any item records an actual difference.
    pub fn has_differences(&self) -> bool {
        self.items
            .iter()
            .any(|i| !matches!(i, SeqChange::Unchanged(_)))
    }

    pub(crate) fn push(&mut self, item: SeqChange) {
        self.items.push(item);
    }
}

/// A single aligned element in a sequence diff.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum SeqChange {
    /// Element present at this position on both sides.
    Unchanged(Value),
    /// Element present only in the received sequence.
    Added(Value),
    /// Element present only in the expected sequence.
    Removed(Value),
    /// Both sides hold a mapping at this position, differing inside.
    NestedMap(TreeDiff),
    /// Both sides hold a sequence at this position, differing inside.
    NestedSeq(SeqDiff),
}
