//! Text report rendering for structural document diffs.
//!
//! Turns a [`TreeDiff`] from `valuediff-core` into the indented, bracketed,
//! color-annotated block used for "expected vs. received" failure output:
//!
//! ```text
//! - Expected
//! + Received
//!
//!   {
//! -    count: 1
//! +    count: 2
//!   }
//! ```
//!
//! Removed lines are red, added lines green. Pass [`ColorMode::Plain`] for
//! non-terminal output.

mod render;
mod style;

pub use style::ColorMode;

use valuediff_core::TreeDiff;

/// Render a diff as an ANSI-colored report.
pub fn generate_report(tree: &TreeDiff) -> String {
    generate_report_with(tree, ColorMode::Ansi)
}

/// Render a diff as a report with the given color mode.
///
/// The body is framed by a two-line legend and enclosing braces; a diff
/// with no entries renders as empty braces. Never fails for any diff the
/// comparator can produce.
pub fn generate_report_with(tree: &TreeDiff, colors: ColorMode) -> String {
    let mut report = String::new();

    report.push('\n');
    report.push_str(&colors.removed("- Expected"));
    report.push('\n');
    report.push_str(&colors.added("+ Received"));
    report.push_str("\n\n");

    if tree.is_empty() {
        report.push_str("  {}");
        return report;
    }

    let body = render::render_tree(tree, 1);
    report.push_str("  {\n");
    report.push_str(&paint(&body, colors));
    report.push_str("\n  }");

    report
}

/// Color whole lines by their gutter character, comma included.
fn paint(body: &str, colors: ColorMode) -> String {
    let painted: Vec<String> = body
        .lines()
        .map(|line| match line.as_bytes().first() {
            Some(b'-') => colors.removed(line),
            Some(b'+') => colors.added(line),
            _ => line.to_string(),
        })
        .collect();

    painted.join("\n")
}
