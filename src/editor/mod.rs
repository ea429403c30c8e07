//! Editor state for the terminal host.
//!
//! This module provides the small editor the navigator runs inside: a read-only
//! text viewer with a cursor line, modal input, and a message line.
//!
//! # Modules
//!
//! - `buffer`: Lines of an open file
//! - `mode`: Editor mode enumeration
//! - `state`: Editor state, which also acts as the navigator's host
//!
//! # Example
//!
//! ```
//! use waypointer::editor::mode::EditorMode;
//!
//! // Editor starts in Normal mode
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! ```

pub mod buffer;
pub mod mode;
pub mod state;
