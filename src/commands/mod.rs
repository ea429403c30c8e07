//! Named commands exposed to the host.
//!
//! Each command takes no arguments and maps onto exactly one
//! [`WaypointNavigator`] operation. Hosts bind them to keys or menus and look
//! them up by name.
//!
//! # Example
//!
//! ```
//! use waypointer::commands::Command;
//!
//! let cmd: Command = "waypointer.BackWithoutClear".parse().unwrap();
//! assert_eq!(cmd, Command::BackWithoutClear);
//! assert_eq!("back_without_clear".parse::<Command>().unwrap(), cmd);
//! assert_eq!(cmd.name(), "waypointer.BackWithoutClear");
//! ```

use crate::history::{EditorContext, StackError, WaypointNavigator};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prefix of every host-facing command identifier.
pub const COMMAND_PREFIX: &str = "waypointer.";

/// A navigator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Record the current position
    Save,
    /// Jump to the last waypoint and consume it
    Back,
    /// Jump to the last waypoint and keep it
    BackWithoutClear,
    /// Jump to the last position left by a back jump
    Forward,
    /// Drop the last waypoint
    RemoveLast,
    /// Empty both stacks
    Clear,
}

/// Errors from looking up a command by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
}

impl Command {
    /// Every command, in the order they are listed to users.
    pub const ALL: [Command; 6] = [
        Command::Save,
        Command::Back,
        Command::BackWithoutClear,
        Command::Forward,
        Command::RemoveLast,
        Command::Clear,
    ];

    /// Returns the host-facing identifier, e.g. `waypointer.Save`.
    pub fn name(self) -> &'static str {
        match self {
            Command::Save => "waypointer.Save",
            Command::Back => "waypointer.Back",
            Command::BackWithoutClear => "waypointer.BackWithoutClear",
            Command::Forward => "waypointer.Forward",
            Command::RemoveLast => "waypointer.RemoveLast",
            Command::Clear => "waypointer.Clear",
        }
    }

    /// Returns a one-line description for help text.
    pub fn description(self) -> &'static str {
        match self {
            Command::Save => "Save the current position as a waypoint",
            Command::Back => "Go back to the last waypoint, removing it",
            Command::BackWithoutClear => "Go back to the last waypoint, keeping it",
            Command::Forward => "Go forward to the position left by the last back",
            Command::RemoveLast => "Remove the last waypoint",
            Command::Clear => "Clear all waypoints",
        }
    }

    /// Runs the command against `navigator`.
    ///
    /// # Errors
    ///
    /// Only fails when a bounded stack overflows.
    pub fn execute<H>(self, navigator: &mut WaypointNavigator, host: &mut H) -> Result<(), StackError>
    where
        H: EditorContext + ?Sized,
    {
        tracing::trace!(command = self.name(), "dispatch");
        match self {
            Command::Save => navigator.save_current(host),
            Command::Back => navigator.back(host),
            Command::BackWithoutClear => navigator.back_without_clear(host),
            Command::Forward => navigator.forward(host),
            Command::RemoveLast => navigator.remove_last(host),
            Command::Clear => navigator.clear_all(host),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// Accepts `waypointer.Save`, `Save`, `save`, `back_without_clear`,
    /// `back-without-clear` and so on, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed.strip_prefix(COMMAND_PREFIX).unwrap_or(trimmed);
        let key: String = bare
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "save" => Ok(Command::Save),
            "back" => Ok(Command::Back),
            "backwithoutclear" => Ok(Command::BackWithoutClear),
            "forward" => Ok(Command::Forward),
            "removelast" => Ok(Command::RemoveLast),
            "clear" => Ok(Command::Clear),
            _ => Err(CommandError::Unknown(trimmed.to_string())),
        }
    }
}
