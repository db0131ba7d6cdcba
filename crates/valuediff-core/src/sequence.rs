//! Sequence aligner: element-level comparison of two ordered lists.
//!
//! Order matters, so the aligner walks both sequences with independent
//! cursors and emits one tagged item per consumed element. List diffing here
//! is a fixed heuristic, not a minimal edit script.
//!
//! Policy: when the current pair of scalars disagrees, the aligner scans the
//! unconsumed tail of the received side for the current expected element. A
//! hit means the expected element arrives later, so the current received
//! element is superfluous (added); a miss means the expected element is
//! missing (removed). This keeps a pure reordering from being reported as a
//! cascade of substitutions.

use serde_json::Value;
use tracing::trace;

use crate::compare::{diff_mappings, CompareOptions};
use crate::diff::{SeqChange, SeqDiff};

/// Align two sequences and produce a [`SeqDiff`].
///
/// Every element of both inputs is consumed exactly once. Same-kind
/// container elements at the same position compare recursively and emit a
/// nested diff when they differ inside; mapping elements always record
/// their common properties so a substituted element renders with context.
pub fn align_sequences(expected: &[Value], received: &[Value], options: CompareOptions) -> SeqDiff {
    trace!(
        expected = expected.len(),
        received = received.len(),
        "aligning sequences"
    );

    let mut diff = SeqDiff::new();
    let mut i = 0;
    let mut j = 0;

    while i < expected.len() || j < received.len() {
        if i < expected.len() && j < received.len() {
            let exp = &expected[i];
            let rec = &received[j];

            if exp == rec {
                diff.push(SeqChange::Unchanged(exp.clone()));
                i += 1;
                j += 1;
                continue;
            }

            match (exp, rec) {
                (Value::Object(e), Value::Object(r)) => {
                    let sub = diff_mappings(e, r, CompareOptions::WITH_COMMON);
                    // Equality was ruled out above, so the sub-diff is
                    // never empty here.
                    diff.push(SeqChange::NestedMap(sub));
                    i += 1;
                    j += 1;
                }
                (Value::Array(e), Value::Array(r)) => {
                    diff.push(SeqChange::NestedSeq(align_sequences(e, r, options)));
                    i += 1;
                    j += 1;
                }
                _ => {
                    if received[j..].contains(exp) {
                        // The expected element occurs later: the current
                        // received element is superfluous.
                        diff.push(SeqChange::Added(rec.clone()));
                        j += 1;
                    } else {
                        // The expected element is missing.
                        diff.push(SeqChange::Removed(exp.clone()));
                        i += 1;
                    }
                }
            }
        } else if i < expected.len() {
            // Ran out of received elements: the rest of expected is missing.
            diff.push(SeqChange::Removed(expected[i].clone()));
            i += 1;
        } else {
            // Ran out of expected elements: the rest of received is extra.
            diff.push(SeqChange::Added(received[j].clone()));
            j += 1;
        }
    }

    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::Change;
    use proptest::prelude::*;
    use serde_json::json;

    fn values(v: Value) -> Vec<Value> {
        match v {
            Value::Array(items) => items,
            other => panic!("expected array fixture, got {:?}", other),
        }
    }

    fn align(expected: Value, received: Value) -> SeqDiff {
        align_sequences(
            &values(expected),
            &values(received),
            CompareOptions::default(),
        )
    }

    #[test]
    fn identical_sequences_all_unchanged() {
        let diff = align(json!([1, "two", null]), json!([1, "two", null]));
        assert!(!diff.has_differences());
        assert_eq!(diff.len(), 3);
    }

    #[test]
    fn empty_sequences_empty_diff() {
        let diff = align(json!([]), json!([]));
        assert!(diff.is_empty());
        assert!(!diff.has_differences());
    }

    #[test]
    fn interior_removal_is_not_a_substitution() {
        let diff = align(json!([1, 2, 3]), json!([1, 3]));
        assert_eq!(
            diff.items,
            vec![
                SeqChange::Unchanged(json!(1)),
                SeqChange::Removed(json!(2)),
                SeqChange::Unchanged(json!(3)),
            ]
        );
    }

    #[test]
    fn interior_insertion_detected() {
        let diff = align(json!([1, 3]), json!([1, 2, 3]));
        assert_eq!(
            diff.items,
            vec![
                SeqChange::Unchanged(json!(1)),
                SeqChange::Added(json!(2)),
                SeqChange::Unchanged(json!(3)),
            ]
        );
    }

    #[test]
    fn trailing_extras_are_additions() {
        let diff = align(json!([1]), json!([1, 2, 3]));
        assert_eq!(
            diff.items,
            vec![
                SeqChange::Unchanged(json!(1)),
                SeqChange::Added(json!(2)),
                SeqChange::Added(json!(3)),
            ]
        );
    }

    #[test]
    fn trailing_missing_are_removals() {
        let diff = align(json!([1, 2, 3]), json!([1]));
        assert_eq!(
            diff.items,
            vec![
                SeqChange::Unchanged(json!(1)),
                SeqChange::Removed(json!(2)),
                SeqChange::Removed(json!(3)),
            ]
        );
    }

    #[test]
    fn substitution_renders_as_removed_then_added() {
        let diff = align(json!([2]), json!([3]));
        assert_eq!(
            diff.items,
            vec![SeqChange::Removed(json!(2)), SeqChange::Added(json!(3))]
        );
    }

    #[test]
    fn reordered_elements_use_scan_ahead() {
        let diff = align(json!([1, 2]), json!([3, 2]));
        // 1 is gone, 3 is new, 2 survives in place.
        assert_eq!(
            diff.items,
            vec![
                SeqChange::Removed(json!(1)),
                SeqChange::Added(json!(3)),
                SeqChange::Unchanged(json!(2)),
            ]
        );
    }

    #[test]
    fn later_occurrence_marks_current_received_as_added() {
        let diff = align(json!([5]), json!([1, 5]));
        assert_eq!(
            diff.items,
            vec![SeqChange::Added(json!(1)), SeqChange::Unchanged(json!(5))]
        );
    }

    #[test]
    fn mapping_elements_compare_with_context() {
        let diff = align(
            json!([{"id": 1, "name": "a"}]),
            json!([{"id": 1, "name": "b"}]),
        );
        match &diff.items[0] {
            SeqChange::NestedMap(sub) => {
                assert_eq!(sub.entries.get("id"), Some(&Change::Unchanged(json!(1))));
                assert!(matches!(
                    sub.entries.get("name"),
                    Some(Change::Changed { .. })
                ));
            }
            other => panic!("expected NestedMap, got {:?}", other),
        }
    }

    #[test]
    fn equal_mapping_elements_stay_unchanged() {
        let diff = align(json!([{"id": 1}]), json!([{"id": 1}]));
        assert_eq!(diff.items, vec![SeqChange::Unchanged(json!({"id": 1}))]);
    }

    #[test]
    fn nested_sequence_elements_recurse() {
        let diff = align(json!([[1, 2]]), json!([[1, 3]]));
        match &diff.items[0] {
            SeqChange::NestedSeq(sub) => {
                assert!(sub.has_differences());
                assert_eq!(sub.items[0], SeqChange::Unchanged(json!(1)));
            }
            other => panic!("expected NestedSeq, got {:?}", other),
        }
    }

    fn arb_scalar_seq() -> impl Strategy<Value = Vec<Value>> {
        prop::collection::vec(
            prop_oneof![
                any::<i8>().prop_map(|n| json!(n)),
                "[a-c]{1,2}".prop_map(Value::String),
                Just(Value::Null),
            ],
            0..8,
        )
    }

    /// How many elements of each input a diff item accounts for.
    fn consumed(item: &SeqChange) -> (usize, usize) {
        match item {
            SeqChange::Unchanged(_) => (1, 1),
            SeqChange::Removed(_) => (1, 0),
            SeqChange::Added(_) => (0, 1),
            SeqChange::NestedMap(_) | SeqChange::NestedSeq(_) => (1, 1),
        }
    }

    proptest! {
        #[test]
        fn alignment_covers_both_inputs(
            expected in arb_scalar_seq(),
            received in arb_scalar_seq(),
        ) {
            let diff = align_sequences(&expected, &received, CompareOptions::default());
            let (from_expected, from_received) = diff
                .items
                .iter()
                .map(consumed)
                .fold((0, 0), |(e, r), (de, dr)| (e + de, r + dr));

            prop_assert_eq!(from_expected, expected.len());
            prop_assert_eq!(from_received, received.len());
        }

        #[test]
        fn self_alignment_has_no_differences(seq in arb_scalar_seq()) {
            let diff = align_sequences(&seq, &seq, CompareOptions::default());
            prop_assert!(!diff.has_differences());
            prop_assert_eq!(diff.len(), seq.len());
        }
    }
}
