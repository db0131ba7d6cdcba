//! Diff tree rendering: nested bracketed text with gutters and commas.
//!
//! Each line begins with a one-character gutter (`-` removed, `+` added,
//! space otherwise) followed by two-space indentation. A changed property
//! renders as its removed line immediately followed by its added line with
//! no comma between them, so a before/after pair reads as one unit; the
//! normal trailing-comma rule resumes after the pair.

use serde_json::Value;
use valuediff_core::{Change, SeqChange, SeqDiff, TreeDiff};

const TAB: &str = "  ";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Sign {
    Added,
    Removed,
    Unchanged,
}

impl Sign {
    fn gutter(self) -> char {
        match self {
            Sign::Added => '+',
            Sign::Removed => '-',
            Sign::Unchanged => ' ',
        }
    }
}

/// The gutter and indentation that start a line at `level`.
fn prefix(sign: Sign, level: usize) -> String {
    format!("{}{}{}", sign.gutter(), TAB, TAB.repeat(level))
}

/// Render the body of a mapping diff at `level`, one unit per entry,
/// comma-joined. The enclosing braces belong to the caller.
pub(crate) fn render_tree(tree: &TreeDiff, level: usize) -> String {
    let units: Vec<String> = tree
        .entries
        .iter()
        .map(|(key, change)| render_entry(key, change, level))
        .collect();

    units.join(",\n")
}

fn render_entry(key: &str, change: &Change, level: usize) -> String {
    match change {
        Change::Added(value) => property(Sign::Added, key, value, level),
        Change::Removed(value) => property(Sign::Removed, key, value, level),
        Change::Unchanged(value) => property(Sign::Unchanged, key, value, level),
        Change::Changed { expected, received } => format!(
            "{}\n{}",
            property(Sign::Removed, key, expected, level),
            property(Sign::Added, key, received, level),
        ),
        Change::NestedMap(sub) => container(key, '{', '}', &render_tree(sub, level + 1), level),
        Change::NestedSeq(sub) => container(key, '[', ']', &render_seq(sub, level + 1), level),
    }
}

fn property(sign: Sign, key: &str, value: &Value, level: usize) -> String {
    format!(
        "{}{}: {}",
        prefix(sign, level),
        key,
        format_value(sign, value, level)
    )
}

/// A nested diff opens its bracket on the property line and closes it at
/// the property's own indentation, both with a space gutter.
fn container(key: &str, open: char, close: char, body: &str, level: usize) -> String {
    let p = prefix(Sign::Unchanged, level);
    if body.is_empty() {
        return format!("{p}{key}: {open}{close}");
    }
    format!("{p}{key}: {open}\n{body}\n{p}{close}")
}

/// Render the body of a sequence diff at `level`. Adjacent removed/added
/// elements form a change set and omit the comma between them.
pub(crate) fn render_seq(seq: &SeqDiff, level: usize) -> String {
    let mut out = String::new();
    let count = seq.items.len();

    for (index, item) in seq.items.iter().enumerate() {
        let unit = match item {
            SeqChange::Unchanged(value) => element(Sign::Unchanged, value, level),
            SeqChange::Added(value) => element(Sign::Added, value, level),
            SeqChange::Removed(value) => element(Sign::Removed, value, level),
            SeqChange::NestedMap(sub) => {
                element_container('{', '}', &render_tree(sub, level + 1), level)
            }
            SeqChange::NestedSeq(sub) => {
                element_container('[', ']', &render_seq(sub, level + 1), level)
            }
        };

        out.push_str(&unit);

        let is_last = index + 1 == count;
        if !is_last {
            if !is_change_set(item, &seq.items[index + 1]) {
                out.push(',');
            }
            out.push('\n');
        }
    }

    out
}

fn element(sign: Sign, value: &Value, level: usize) -> String {
    format!("{}{}", prefix(sign, level), format_value(sign, value, level))
}

fn element_container(open: char, close: char, body: &str, level: usize) -> String {
    let p = prefix(Sign::Unchanged, level);
    if body.is_empty() {
        return format!("{p}{open}{close}");
    }
    format!("{p}{open}\n{body}\n{p}{close}")
}

fn is_change_set(current: &SeqChange, upcoming: &SeqChange) -> bool {
    matches!(
        (current, upcoming),
        (SeqChange::Removed(_), SeqChange::Added(_))
            | (SeqChange::Added(_), SeqChange::Removed(_))
    )
}

/// Render a raw value with the property's gutter repeated on every line.
///
/// Scalars are compact JSON (quoted strings, bare numbers, `null`);
/// composites become indented blocks, empty ones stay inline.
fn format_value(sign: Sign, value: &Value, level: usize) -> String {
    match value {
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let mut out = String::from("{\n");
            let last = map.len() - 1;
            for (index, (name, child)) in map.iter().enumerate() {
                out.push_str(&prefix(sign, level + 1));
                out.push_str(name);
                out.push_str(": ");
                out.push_str(&format_value(sign, child, level + 1));
                if index < last {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&prefix(sign, level));
            out.push('}');
            out
        }
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let mut out = String::from("[\n");
            let last = items.len() - 1;
            for (index, child) in items.iter().enumerate() {
                out.push_str(&prefix(sign, level + 1));
                out.push_str(&format_value(sign, child, level + 1));
                if index < last {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&prefix(sign, level));
            out.push(']');
            out
        }
        scalar => scalar.to_string(),
    }
}
