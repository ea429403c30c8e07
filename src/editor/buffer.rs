//! In-memory text of an open file.

/// The lines of a file opened in the editor.
///
/// `path` is the identifier recorded in waypoints, normally an absolute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    path: String,
    lines: Vec<String>,
}

impl Buffer {
    /// Creates a buffer from already split lines.
    ///
    /// An empty file still has one (empty) line so the cursor has somewhere
    /// to sit.
    pub fn new(path: impl Into<String>, lines: Vec<String>) -> Self {
        let lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };
        Self {
            path: path.into(),
            lines,
        }
    }

    /// Creates a buffer by splitting `content` on line endings.
    pub fn from_text(path: impl Into<String>, content: &str) -> Self {
        Self::new(path, content.lines().map(str::to_string).collect())
    }

    /// Returns the file identifier.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns all lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the line at `index`, if any.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Returns the number of lines (always at least 1).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the index of the last line.
    pub fn last_line(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_has_one_line() {
        let buffer = Buffer::from_text("/tmp/empty.txt", "");
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), Some(""));
        assert_eq!(buffer.last_line(), 0);
    }

    #[test]
    fn test_crlf_is_split() {
        let buffer = Buffer::from_text("a", "one\r\ntwo\r\n");
        assert_eq!(buffer.lines(), &["one".to_string(), "two".to_string()]);
    }
}
