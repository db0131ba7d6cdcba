//! Line coloring for diff reports.
//!
//! Removed lines render red, added lines green. `Plain` is the no-op mode
//! for non-terminal output; with `Ansi`, escape emission still follows the
//! `colored` crate's terminal detection and `NO_COLOR` handling.

use colored::Colorize;

/// How report lines are styled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Wrap removed/added lines in ANSI red/green escapes.
    #[default]
    Ansi,
    /// Emit lines unstyled.
    Plain,
}

impl ColorMode {
    pub(crate) fn removed(self, line: &str) -> String {
        match self {
            ColorMode::Ansi => line.red().to_string(),
            ColorMode::Plain => line.to_string(),
        }
    }

    pub(crate) fn added(self, line: &str) -> String {
        match self {
            ColorMode::Ansi => line.green().to_string(),
            ColorMode::Plain => line.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_is_a_no_op() {
        assert_eq!(ColorMode::Plain.removed("- x"), "- x");
        assert_eq!(ColorMode::Plain.added("+ x"), "+ x");
    }

    #[test]
    fn ansi_mode_wraps_lines() {
        colored::control::set_override(true);
        assert_eq!(ColorMode::Ansi.removed("- x"), "\u{1b}[31m- x\u{1b}[0m");
        assert_eq!(ColorMode::Ansi.added("+ x"), "\u{1b}[32m+ x\u{1b}[0m");
    }
}
