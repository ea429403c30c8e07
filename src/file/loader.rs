//! Text file loading.
//!
//! This module reads files from disk into [`Buffer`]s. The buffer's path is
//! made absolute so waypoints recorded against it stay valid regardless of
//! the working directory.

use crate::editor::buffer::Buffer;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads a UTF-8 text file into a buffer.
///
/// # Examples
///
/// ```no_run
/// use waypointer::file::loader::load_text_file;
///
/// let buffer = load_text_file("src/main.rs").unwrap();
/// println!("{} lines", buffer.line_count());
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist
/// - The file cannot be read (permissions, etc.)
/// - The file contents are not valid UTF-8
pub fn load_text_file<P: AsRef<Path>>(path: P) -> Result<Buffer> {
    let path_ref = path.as_ref();

    let content = fs::read_to_string(path_ref)
        .with_context(|| format!("Failed to read file {}", path_ref.display()))?;

    let absolute = absolute_path(path_ref)?;
    tracing::debug!(path = %absolute, "loaded file");

    Ok(Buffer::from_text(absolute, &content))
}

/// Returns `path` as an absolute path string.
///
/// Existing files are canonicalized so the same file always yields the same
/// identifier.
pub fn absolute_path(path: &Path) -> Result<String> {
    let absolute = match fs::canonicalize(path) {
        Ok(p) => p,
        Err(_) if path.is_absolute() => path.to_path_buf(),
        Err(_) => std::env::current_dir()
            .context("Failed to determine current directory")?
            .join(path),
    };
    Ok(absolute.to_string_lossy().into_owned())
}
