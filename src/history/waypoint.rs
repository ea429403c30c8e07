//! Recorded file positions.

use std::fmt;

/// A recorded cursor position: a file identifier and a 0-based line index.
///
/// Waypoints are plain values. Two waypoints are equal when both the file
/// and the line match, which is what save deduplication compares against.
///
/// # Example
///
/// ```
/// use waypointer::history::Waypoint;
///
/// let wp = Waypoint::new("/src/main.rs", 10);
/// assert_eq!(wp.file(), "/src/main.rs");
/// assert_eq!(wp.line(), 10);
/// assert_eq!(wp.to_string(), "File: /src/main.rs, Line: 10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Waypoint {
    file: String,
    line: usize,
}

impl Waypoint {
    /// Creates a waypoint for `line` (0-based) in `file`.
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Returns the file identifier (absolute path or URI).
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns the 0-based line index.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File: {}, Line: {}", self.file, self.line)
    }
}
