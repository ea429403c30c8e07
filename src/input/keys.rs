//! Keyboard event mapping and input event types.

use crate::commands::Command;
use crate::editor::mode::EditorMode;
use termion::event::{Event, Key};

/// High-level input events abstracted from raw keyboard input.
///
/// These events represent user intentions (quit, move cursor, go back)
/// rather than specific key presses, allowing for mode-specific keybindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User wants to quit
    Quit,
    /// Move cursor down
    MoveDown,
    /// Move cursor up
    MoveUp,
    /// Jump to first line (g, Home)
    JumpToTop,
    /// Jump to last line (G, End)
    JumpToBottom,
    /// Move down one screen (Ctrl-f, PageDown)
    PageDown,
    /// Move up one screen (Ctrl-b, PageUp)
    PageUp,
    /// Show or hide the waypoint panel
    TogglePanel,
    /// Run a navigator command
    Waypoint(Command),
    /// Enter command mode (:)
    EnterCommandMode,
    /// Leave command mode without running anything
    ExitMode,
    /// Type a character on the command line
    CommandCharacter(char),
    /// Delete the last character of the command line
    CommandBackspace,
    /// Run the typed command line
    CommandSubmit,
    /// Unknown or unmapped key
    Unknown,
}

/// Maps a termion Event to an InputEvent based on the current editor mode.
///
/// Normal mode keys:
/// - `j`/`k`/arrows move, `g`/`G` jump to top/bottom, `q` quits
/// - `s` save, `b` back, `B` back without clear, `f` forward,
///   `x` remove last, `X` clear all
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use waypointer::commands::Command;
/// use waypointer::editor::mode::EditorMode;
/// use waypointer::input::keys::{map_key_event, InputEvent};
///
/// let event = Event::Key(Key::Char('b'));
/// let input_event = map_key_event(event, &EditorMode::Normal);
/// assert_eq!(input_event, InputEvent::Waypoint(Command::Back));
/// ```
pub fn map_key_event(event: Event, mode: &EditorMode) -> InputEvent {
    // We only care about key events
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    match mode {
        EditorMode::Normal => match key {
            Key::Ctrl('f') => InputEvent::PageDown,
            Key::Ctrl('b') => InputEvent::PageUp,
            Key::Ctrl('c') => InputEvent::Quit,
            Key::Char('q') => InputEvent::Quit,
            Key::Char('j') => InputEvent::MoveDown,
            Key::Char('k') => InputEvent::MoveUp,
            Key::Char('g') => InputEvent::JumpToTop,
            Key::Char('G') => InputEvent::JumpToBottom,
            Key::Char('p') => InputEvent::TogglePanel,
            Key::Char(':') => InputEvent::EnterCommandMode,
            Key::Char('s') => InputEvent::Waypoint(Command::Save),
            Key::Char('b') => InputEvent::Waypoint(Command::Back),
            Key::Char('B') => InputEvent::Waypoint(Command::BackWithoutClear),
            Key::Char('f') => InputEvent::Waypoint(Command::Forward),
            Key::Char('x') => InputEvent::Waypoint(Command::RemoveLast),
            Key::Char('X') => InputEvent::Waypoint(Command::Clear),
            Key::Down => InputEvent::MoveDown,
            Key::Up => InputEvent::MoveUp,
            Key::PageDown => InputEvent::PageDown,
            Key::PageUp => InputEvent::PageUp,
            Key::Home => InputEvent::JumpToTop,
            Key::End => InputEvent::JumpToBottom,
            _ => InputEvent::Unknown,
        },
        EditorMode::Command => match key {
            Key::Esc => InputEvent::ExitMode,
            Key::Char('\n') => InputEvent::CommandSubmit,
            Key::Backspace => InputEvent::CommandBackspace,
            Key::Char(c) => InputEvent::CommandCharacter(c),
            _ => InputEvent::Unknown,
        },
    }
}
