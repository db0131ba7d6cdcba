//! Structural comparator: walk two mappings in lock-step and produce a
//! [`TreeDiff`].
//!
//! The comparator classifies each property as added, removed, changed, or
//! nested. Nested containers recurse; each recursive call returns a freshly
//! owned sub-tree that the caller merges, so no tree is ever shared across
//! recursion levels.

use serde_json::{Map, Value};

use crate::diff::{Change, TreeDiff};
use crate::sequence::align_sequences;

/// Options controlling a comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Record properties that are identical on both sides as
    /// [`Change::Unchanged`] entries, for context. Off by default: the
    /// canonical diff holds differences only.
    pub include_common: bool,
}

impl CompareOptions {
    pub(crate) const WITH_COMMON: CompareOptions = CompareOptions {
        include_common: true,
    };
}

/// The runtime kind of a value, for change classification.
///
/// Two values of different kinds are always a changed property; deep
/// comparison only happens between same-kind containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Sequence,
    Mapping,
}

impl ValueKind {
    pub(crate) fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Sequence,
            Value::Object(_) => ValueKind::Mapping,
        }
    }
}

/// Compare two mappings and produce a diff.
///
/// Keys present only in `expected` are `Removed`, keys present only in
/// `received` are `Added`. Keys present in both compare by kind first: a
/// kind mismatch is a `Changed` entry, same-kind containers recurse and
/// contribute a nested entry only when they differ inside, and same-kind
/// scalars compare by equality. Neither input is mutated.
pub fn diff_mappings(
    expected: &Map<String, Value>,
    received: &Map<String, Value>,
    options: CompareOptions,
) -> TreeDiff {
    let mut tree = TreeDiff::new();

    // Removed, changed, and nested entries, driven by the expected side.
    for (key, expected_value) in expected {
        let Some(received_value) = received.get(key) else {
            tree.insert(key, Change::Removed(expected_value.clone()));
            continue;
        };

        match (expected_value, received_value) {
            (Value::Object(e), Value::Object(r)) => {
                let sub = diff_mappings(e, r, options);
                if !sub.has_differences() {
                    continue;
                }
                tree.insert(key, Change::NestedMap(sub));
            }
            (Value::Array(e), Value::Array(r)) => {
                let sub = align_sequences(e, r, options);
                if !sub.has_differences() {
                    continue;
                }
                tree.insert(key, Change::NestedSeq(sub));
            }
            _ if ValueKind::of(expected_value) != ValueKind::of(received_value) => {
                tree.insert(
                    key,
                    Change::Changed {
                        expected: expected_value.clone(),
                        received: received_value.clone(),
                    },
                );
            }
            _ if expected_value != received_value => {
                tree.insert(
                    key,
                    Change::Changed {
                        expected: expected_value.clone(),
                        received: received_value.clone(),
                    },
                );
            }
            _ if options.include_common => {
                tree.insert(key, Change::Unchanged(expected_value.clone()));
            }
            _ => {}
        }
    }

    // Added entries, driven by the received side.
    for (key, received_value) in received {
        if !expected.contains_key(key) {
            tree.insert(key, Change::Added(received_value.clone()));
        }
    }

    tree
}
