//! Input event handler for polling and processing keyboard events.

use super::keys::{map_key_event, InputEvent};
use crate::commands::{Command, CommandError};
use crate::editor::mode::EditorMode;
use crate::editor::state::{EditorState, MessageLevel};
use crate::history::WaypointNavigator;
use anyhow::{Context, Result};
use std::io::{self, Stdin};
use std::time::Duration;
use termion::event::Event;
use termion::input::{Events, TermRead};

/// Handles terminal input events and updates editor state.
///
/// The InputHandler polls for termion events, converts them to
/// [`InputEvent`]s, and applies them to the editor and the navigator.
/// Navigator commands run to completion before the jumps they request are
/// applied to the editor.
pub struct InputHandler {
    /// Event iterator (maintains position in input buffer)
    events: Events<Stdin>,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            events: io::stdin().events(),
        }
    }

    /// Polls for a terminal event.
    ///
    /// Returns Some(Event) if an event occurred, None if input ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the event system fails
    pub fn poll_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        match self.events.next() {
            Some(event_result) => Ok(Some(event_result?)),
            None => Ok(None),
        }
    }

    /// Handles a terminal event.
    ///
    /// Returns Ok(true) if the application should quit.
    ///
    /// # Errors
    ///
    /// Returns an error only when a bounded waypoint stack overflows.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use termion::event::{Event, Key};
    /// use waypointer::editor::state::EditorState;
    /// use waypointer::history::WaypointNavigator;
    /// use waypointer::input::InputHandler;
    ///
    /// let mut handler = InputHandler::new();
    /// let mut state = EditorState::new("default-dark".to_string());
    /// let mut navigator = WaypointNavigator::new();
    /// let event = Event::Key(Key::Char('q'));
    /// let should_quit = handler.handle_event(event, &mut state, &mut navigator).unwrap();
    /// assert!(should_quit);
    /// ```
    pub fn handle_event(
        &mut self,
        event: Event,
        state: &mut EditorState,
        navigator: &mut WaypointNavigator,
    ) -> Result<bool> {
        handle_input(map_key_event(event, state.mode()), state, navigator)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies a mapped input event to the editor and navigator.
///
/// Split from [`InputHandler`] so it can run without a terminal.
///
/// Returns Ok(true) if the application should quit.
///
/// # Errors
///
/// Returns an error only when a bounded waypoint stack overflows.
pub fn handle_input(
    input: InputEvent,
    state: &mut EditorState,
    navigator: &mut WaypointNavigator,
) -> Result<bool> {
    match input {
        InputEvent::Quit => return Ok(true),
        InputEvent::MoveDown => state.move_down(1),
        InputEvent::MoveUp => state.move_up(1),
        InputEvent::JumpToTop => state.jump_to_top(),
        InputEvent::JumpToBottom => state.jump_to_bottom(),
        InputEvent::PageDown => state.page_down(),
        InputEvent::PageUp => state.page_up(),
        InputEvent::TogglePanel => state.toggle_waypoint_panel(),
        InputEvent::Waypoint(command) => run_waypoint_command(command, state, navigator)?,
        InputEvent::EnterCommandMode => {
            state.clear_message();
            state.clear_command_buffer();
            state.set_mode(EditorMode::Command);
        }
        InputEvent::ExitMode => {
            state.clear_command_buffer();
            state.set_mode(EditorMode::Normal);
        }
        InputEvent::CommandCharacter(c) => state.push_to_command_buffer(c),
        InputEvent::CommandBackspace => {
            if state.command_buffer().is_empty() {
                state.set_mode(EditorMode::Normal);
            } else {
                state.pop_from_command_buffer();
            }
        }
        InputEvent::CommandSubmit => {
            let command = state.command_buffer().to_string();
            state.clear_command_buffer();
            state.set_mode(EditorMode::Normal);
            return execute_command(&command, state, navigator);
        }
        InputEvent::Unknown => {}
    }
    Ok(false)
}

/// Runs a navigator command, then applies any jumps it requested.
fn run_waypoint_command(
    command: Command,
    state: &mut EditorState,
    navigator: &mut WaypointNavigator,
) -> Result<()> {
    command
        .execute(navigator, state)
        .with_context(|| format!("{} failed", command.name()))?;
    state.apply_pending_jumps();
    Ok(())
}

/// Executes a `:` command line.
///
/// Besides the navigator commands (`:save`, `:back`, `:waypointer.Forward`,
/// ...) this understands `:q`, `:e <path>`, `:theme <name>`, `:panel` and
/// `:commands`.
fn execute_command(
    command: &str,
    state: &mut EditorState,
    navigator: &mut WaypointNavigator,
) -> Result<bool> {
    let command = command.trim();

    match command {
        "" => return Ok(false),
        "q" | "quit" => return Ok(true),
        "panel" => {
            state.toggle_waypoint_panel();
            return Ok(false);
        }
        "commands" | "help" => {
            let lines: Vec<String> = Command::ALL
                .iter()
                .map(|c| format!("{} - {}", c.name(), c.description()))
                .collect();
            state.set_message(lines.join("; "), MessageLevel::Info);
            return Ok(false);
        }
        _ => {}
    }

    if let Some(path) = command
        .strip_prefix("e ")
        .or_else(|| command.strip_prefix("edit "))
    {
        let path = path.trim();
        match state.open_file(path) {
            Ok(()) => state.set_message(format!("Opened {}", path), MessageLevel::Info),
            Err(e) => state.set_message(format!("Error: {:#}", e), MessageLevel::Error),
        }
        return Ok(false);
    }

    if let Some(theme_name) = command.strip_prefix("theme ") {
        use crate::theme::{get_builtin_theme, list_builtin_themes};
        let theme_name = theme_name.trim();
        if get_builtin_theme(theme_name).is_some() {
            state.request_theme_change(theme_name.to_string());
            state.set_message(
                format!("Switched to theme: {}", theme_name),
                MessageLevel::Info,
            );
        } else {
            state.set_message(
                format!(
                    "Unknown theme: {} (available: {})",
                    theme_name,
                    list_builtin_themes().join(", ")
                ),
                MessageLevel::Error,
            );
        }
        return Ok(false);
    }

    match command.parse::<Command>() {
        Ok(cmd) => run_waypoint_command(cmd, state, navigator)?,
        Err(CommandError::Unknown(name)) => {
            state.set_message(format!("Unknown command: {}", name), MessageLevel::Error);
        }
    }
    Ok(false)
}
