//! Editor mode management.
//!
//! The viewer has two modes:
//!
//! - **Normal**: cursor movement and single-key waypoint commands
//! - **Command**: typing a `:` command line
//!
//! # Example
//!
//! ```
//! use waypointer::editor::mode::EditorMode;
//!
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! assert_eq!(format!("{}", mode), "NORMAL");
//! ```

use std::fmt;

/// Represents the current mode of the editor.
///
/// The mode decides how keys are interpreted and is shown in the status line
/// through the `Display` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Navigation and waypoint keys.
    #[default]
    Normal,
    /// Entering a `:` command.
    Command,
}

impl fmt::Display for EditorMode {
    /// Formats the mode as an uppercase string for the status line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Normal => write!(f, "NORMAL"),
            EditorMode::Command => write!(f, "COMMAND"),
        }
    }
}
