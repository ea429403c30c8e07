//! Error types for the history stacks.

use thiserror::Error;

/// Hard failures raised by [`BoundedStack`](super::BoundedStack).
///
/// Empty stacks are not errors; they surface as `None` from `pop`/`peek`
/// and as notifications from the navigator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    /// A push was attempted on a stack already holding `capacity` items.
    #[error("stack has reached max capacity ({capacity}), cannot add more items")]
    CapacityExceeded { capacity: usize },
}
