//! Capabilities the navigator needs from its host editor.

use super::waypoint::Waypoint;

/// Reports where the user currently is.
pub trait PositionSource {
    /// Returns the focused file and cursor line, or `None` when there is no
    /// active editable context.
    fn current_position(&self) -> Option<Waypoint>;
}

/// Lets the navigator move the user and talk to them.
pub trait Navigator {
    /// Requests that the host open `waypoint.file()` and place the cursor on
    /// `waypoint.line()`.
    ///
    /// This is a one-way request. Implementations should queue the jump and
    /// return immediately; the navigator never waits for it to complete.
    fn move_to(&mut self, waypoint: Waypoint);

    /// Shows a short informational message to the user.
    fn notify(&mut self, message: &str);
}

/// A host providing both capabilities.
///
/// Implemented automatically for every type that implements
/// [`PositionSource`] and [`Navigator`].
pub trait EditorContext: PositionSource + Navigator {}

impl<T: PositionSource + Navigator + ?Sized> EditorContext for T {}
