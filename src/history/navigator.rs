//! Back/forward navigation over recorded waypoints.
//!
//! The navigator owns two stacks. `backward` holds positions the user moved
//! away from, `forward` holds positions left behind by a backward jump so they
//! can be revisited. All host interaction goes through [`EditorContext`]:
//! the current position is read from it, jumps and messages are sent to it.

use super::context::EditorContext;
use super::error::StackError;
use super::stack::BoundedStack;
use super::waypoint::Waypoint;
use tracing::debug;

/// Message shown when there is nothing to go back to or remove.
pub const BACKWARD_EMPTY: &str = "Backward Stack is Empty";
/// Message shown when there is nothing to go forward to.
pub const FORWARD_EMPTY: &str = "Forward Stack is Empty";
/// Message shown after both stacks are emptied.
pub const CLEARED: &str = "Cleared!";

/// State machine over the backward and forward waypoint stacks.
///
/// Empty stacks and a missing current position are normal outcomes: they are
/// reported through [`Navigator::notify`](super::Navigator::notify) or skipped
/// silently. The only error an operation returns is
/// [`StackError::CapacityExceeded`], which can only happen when the navigator
/// was built with bounded stacks. A failing operation leaves both stacks as
/// they were.
///
/// Note that [`forward`](Self::forward) does not record the position it
/// leaves onto `backward`, while [`back`](Self::back) does record onto
/// `forward`. Returning to a position left by a forward jump takes a fresh
/// save.
#[derive(Debug, Clone)]
pub struct WaypointNavigator {
    backward: BoundedStack<Waypoint>,
    forward: BoundedStack<Waypoint>,
    /// Whether a successful save is confirmed with a message
    confirm_save: bool,
}

impl WaypointNavigator {
    /// Creates a navigator with two empty, unbounded stacks.
    pub fn new() -> Self {
        Self::with_capacities(None, None)
    }

    /// Creates a navigator whose stacks are bounded when a capacity is given.
    pub fn with_capacities(backward: Option<usize>, forward: Option<usize>) -> Self {
        Self {
            backward: BoundedStack::with_optional_capacity(backward),
            forward: BoundedStack::with_optional_capacity(forward),
            confirm_save: true,
        }
    }

    /// Enables or disables the confirmation message on save.
    pub fn set_confirm_save(&mut self, confirm: bool) {
        self.confirm_save = confirm;
    }

    /// Returns the backward stack.
    pub fn backward(&self) -> &BoundedStack<Waypoint> {
        &self.backward
    }

    /// Returns the forward stack.
    pub fn forward_stack(&self) -> &BoundedStack<Waypoint> {
        &self.forward
    }

    /// Records the host's current position on the backward stack.
    ///
    /// Does nothing when the host has no position or when the position equals
    /// the current top of the backward stack.
    pub fn save_current<H>(&mut self, host: &mut H) -> Result<(), StackError>
    where
        H: EditorContext + ?Sized,
    {
        let Some(current) = host.current_position() else {
            debug!("save skipped, no active position");
            return Ok(());
        };

        if self.backward.peek() == Some(&current) {
            debug!(%current, "save skipped, same as last waypoint");
            return Ok(());
        }

        self.backward.push(current.clone())?;
        debug!(%current, depth = self.backward.size(), "saved waypoint");

        if self.confirm_save {
            host.notify(&format!("Stored {}", current));
        }
        Ok(())
    }

    /// Jumps to the most recent waypoint, consuming it.
    ///
    /// The position being left is pushed onto the forward stack when the host
    /// has one.
    pub fn back<H>(&mut self, host: &mut H) -> Result<(), StackError>
    where
        H: EditorContext + ?Sized,
    {
        if self.backward.is_empty() {
            host.notify(BACKWARD_EMPTY);
            return Ok(());
        }

        self.remember_for_forward(&*host)?;

        if let Some(target) = self.backward.pop() {
            debug!(%target, remaining = self.backward.size(), "back");
            host.move_to(target);
        }
        Ok(())
    }

    /// Jumps to the most recent waypoint without consuming it.
    ///
    /// Repeating this keeps returning to the same waypoint until something new
    /// is saved. The position being left still goes onto the forward stack.
    pub fn back_without_clear<H>(&mut self, host: &mut H) -> Result<(), StackError>
    where
        H: EditorContext + ?Sized,
    {
        let Some(target) = self.backward.peek().cloned() else {
            host.notify(BACKWARD_EMPTY);
            return Ok(());
        };

        self.remember_for_forward(&*host)?;

        debug!(%target, "back without clear");
        host.move_to(target);
        Ok(())
    }

    /// Jumps to the most recent forward waypoint, consuming it.
    ///
    /// Nothing is pushed onto the backward stack.
    pub fn forward<H>(&mut self, host: &mut H) -> Result<(), StackError>
    where
        H: EditorContext + ?Sized,
    {
        match self.forward.pop() {
            Some(target) => {
                debug!(%target, remaining = self.forward.size(), "forward");
                host.move_to(target);
            }
            None => host.notify(FORWARD_EMPTY),
        }
        Ok(())
    }

    /// Discards the most recent waypoint without moving.
    pub fn remove_last<H>(&mut self, host: &mut H) -> Result<(), StackError>
    where
        H: EditorContext + ?Sized,
    {
        match self.backward.pop() {
            Some(removed) => {
                debug!(%removed, "removed last waypoint");
                host.notify(&format!(
                    "Removed File {}, Line {}",
                    removed.file(),
                    removed.line()
                ));
            }
            None => host.notify(BACKWARD_EMPTY),
        }
        Ok(())
    }

    /// Empties both stacks.
    pub fn clear_all<H>(&mut self, host: &mut H) -> Result<(), StackError>
    where
        H: EditorContext + ?Sized,
    {
        self.backward.clear();
        self.forward.clear();
        debug!("cleared all waypoints");
        host.notify(CLEARED);
        Ok(())
    }

    fn remember_for_forward<H>(&mut self, host: &H) -> Result<(), StackError>
    where
        H: EditorContext + ?Sized,
    {
        if let Some(current) = host.current_position() {
            self.forward.push(current)?;
        }
        Ok(())
    }
}

impl Default for WaypointNavigator {
    fn default() -> Self {
        Self::new()
    }
}
