//! Editor state management.
//!
//! This module provides the `EditorState` struct that holds all runtime state
//! of the viewer: the open buffer, cursor line, scroll position, mode, the
//! command line, the message line, and the queue of jump requests made by the
//! waypoint navigator.
//!
//! `EditorState` is the host side of the navigator. It reports the cursor
//! position through [`PositionSource`] and receives jumps and messages through
//! [`Navigator`]. Jumps are only queued when requested; the event loop applies
//! them with [`EditorState::apply_pending_jumps`] once the command returns.
//!
//! # Example
//!
//! ```
//! use waypointer::editor::buffer::Buffer;
//! use waypointer::editor::mode::EditorMode;
//! use waypointer::editor::state::EditorState;
//! use waypointer::history::PositionSource;
//!
//! let mut state = EditorState::new("default-dark".to_string());
//! assert_eq!(state.mode(), &EditorMode::Normal);
//! assert_eq!(state.current_position(), None);
//!
//! state.set_buffer(Buffer::from_text("/notes.txt", "a\nb\nc"));
//! state.move_down(1);
//! let at = state.current_position().unwrap();
//! assert_eq!((at.file(), at.line()), ("/notes.txt", 1));
//! ```

use super::buffer::Buffer;
use super::mode::EditorMode;
use crate::file::loader::{absolute_path, load_text_file};
use crate::history::{Navigator, PositionSource, Waypoint};
use anyhow::Result;
use std::collections::VecDeque;
use std::path::Path;

/// Represents a message to display to the user.
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

pub struct EditorState {
    buffer: Option<Buffer>,
    mode: EditorMode,
    cursor_line: usize,
    scroll_offset: usize,
    viewport_height: usize,
    message: Option<Message>,
    command_buffer: String,
    /// Jumps requested by the navigator, oldest first
    pending_jumps: VecDeque<Waypoint>,
    current_theme: String,
    pending_theme: Option<String>,
    show_line_numbers: bool,
    show_waypoint_panel: bool,
}

impl EditorState {
    /// Creates an editor with no open file.
    pub fn new(initial_theme_name: String) -> Self {
        Self {
            buffer: None,
            mode: EditorMode::default(),
            cursor_line: 0,
            scroll_offset: 0,
            viewport_height: 20,
            message: None,
            command_buffer: String::new(),
            pending_jumps: VecDeque::new(),
            current_theme: initial_theme_name,
            pending_theme: None,
            show_line_numbers: true,
            show_waypoint_panel: true,
        }
    }

    /// Returns the open buffer, if any.
    pub fn buffer(&self) -> Option<&Buffer> {
        self.buffer.as_ref()
    }

    /// Returns the path of the open file, if any.
    pub fn filename(&self) -> Option<&str> {
        self.buffer.as_ref().map(Buffer::path)
    }

    /// Replaces the open buffer and puts the cursor on the first line.
    pub fn set_buffer(&mut self, buffer: Buffer) {
        self.buffer = Some(buffer);
        self.cursor_line = 0;
        self.scroll_offset = 0;
    }

    /// Loads `path` from disk and makes it the open buffer.
    ///
    /// Reopening the file that is already open keeps the cursor where it is.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read. The current buffer is kept.
    pub fn open_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let (Some(open), Ok(requested)) = (self.filename(), absolute_path(path)) {
            if open == requested {
                return Ok(());
            }
        }

        let buffer = load_text_file(path)?;
        tracing::info!(path = buffer.path(), lines = buffer.line_count(), "opened file");
        self.set_buffer(buffer);
        Ok(())
    }

    /// Returns the current editor mode.
    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// Sets the editor mode.
    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    /// Returns the 0-based cursor line.
    pub fn cursor_line(&self) -> usize {
        self.cursor_line
    }

    /// Puts the cursor on `line`, clamped to the open buffer.
    pub fn set_cursor_line(&mut self, line: usize) {
        let last = self.buffer.as_ref().map(Buffer::last_line).unwrap_or(0);
        self.cursor_line = line.min(last);
        self.adjust_scroll();
    }

    /// Moves the cursor down `count` lines.
    pub fn move_down(&mut self, count: usize) {
        self.set_cursor_line(self.cursor_line.saturating_add(count));
    }

    /// Moves the cursor up `count` lines.
    pub fn move_up(&mut self, count: usize) {
        self.set_cursor_line(self.cursor_line.saturating_sub(count));
    }

    /// Moves the cursor to the first line.
    pub fn jump_to_top(&mut self) {
        self.set_cursor_line(0);
    }

    /// Moves the cursor to the last line.
    pub fn jump_to_bottom(&mut self) {
        self.set_cursor_line(usize::MAX);
    }

    /// Moves the cursor down by one viewport.
    pub fn page_down(&mut self) {
        self.move_down(self.viewport_height.max(1));
    }

    /// Moves the cursor up by one viewport.
    pub fn page_up(&mut self) {
        self.move_up(self.viewport_height.max(1));
    }

    /// Returns the index of the first visible line.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Returns the number of text lines that fit on screen.
    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Updates the viewport height after a resize and keeps the cursor visible.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.adjust_scroll();
    }

    fn adjust_scroll(&mut self) {
        let height = self.viewport_height.max(1);
        if self.cursor_line < self.scroll_offset {
            self.scroll_offset = self.cursor_line;
        } else if self.cursor_line >= self.scroll_offset + height {
            self.scroll_offset = self.cursor_line + 1 - height;
        }
    }

    /// Returns the current message, if any.
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Sets a message to display to the user.
    pub fn set_message(&mut self, text: String, level: MessageLevel) {
        self.message = Some(Message { text, level });
    }

    /// Clears the current message.
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Returns the command line being typed.
    pub fn command_buffer(&self) -> &str {
        &self.command_buffer
    }

    /// Appends a character to the command line.
    pub fn push_to_command_buffer(&mut self, c: char) {
        self.command_buffer.push(c);
    }

    /// Removes the last character of the command line.
    pub fn pop_from_command_buffer(&mut self) {
        self.command_buffer.pop();
    }

    /// Empties the command line.
    pub fn clear_command_buffer(&mut self) {
        self.command_buffer.clear();
    }

    /// Returns the jumps waiting to be applied.
    pub fn pending_jumps(&self) -> impl Iterator<Item = &Waypoint> {
        self.pending_jumps.iter()
    }

    /// Applies every queued jump in request order.
    ///
    /// A jump to another file opens it first. A file that cannot be opened
    /// produces an error message and the jump is dropped. Lines past the end
    /// of the file land on the last line.
    pub fn apply_pending_jumps(&mut self) {
        while let Some(target) = self.pending_jumps.pop_front() {
            if let Err(e) = self.open_file(target.file()) {
                tracing::warn!(%target, error = %e, "jump failed");
                self.set_message(
                    format!("Cannot open {}: {}", target.file(), e),
                    MessageLevel::Error,
                );
                continue;
            }
            self.set_cursor_line(target.line());
        }
    }

    /// Returns the name of the active theme.
    pub fn current_theme(&self) -> &str {
        &self.current_theme
    }

    /// Asks the UI to switch themes on the next frame.
    pub fn request_theme_change(&mut self, theme_name: String) {
        self.current_theme = theme_name.clone();
        self.pending_theme = Some(theme_name);
    }

    /// Takes the pending theme change, if any.
    pub fn take_pending_theme(&mut self) -> Option<String> {
        self.pending_theme.take()
    }

    pub fn show_line_numbers(&self) -> bool {
        self.show_line_numbers
    }

    pub fn set_show_line_numbers(&mut self, show: bool) {
        self.show_line_numbers = show;
    }

    pub fn show_waypoint_panel(&self) -> bool {
        self.show_waypoint_panel
    }

    pub fn set_show_waypoint_panel(&mut self, show: bool) {
        self.show_waypoint_panel = show;
    }

    pub fn toggle_waypoint_panel(&mut self) {
        self.show_waypoint_panel = !self.show_waypoint_panel;
    }
}

impl PositionSource for EditorState {
    fn current_position(&self) -> Option<Waypoint> {
        self.buffer
            .as_ref()
            .map(|buffer| Waypoint::new(buffer.path(), self.cursor_line))
    }
}

impl Navigator for EditorState {
    fn move_to(&mut self, waypoint: Waypoint) {
        self.pending_jumps.push_back(waypoint);
    }

    fn notify(&mut self, message: &str) {
        self.set_message(message.to_string(), MessageLevel::Info);
    }
}
