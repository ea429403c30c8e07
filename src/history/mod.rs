//! Waypoint history: the stacks and the navigator that drives them.
//!
//! # Modules
//!
//! - `waypoint`: the recorded (file, line) value
//! - `stack`: LIFO container with an optional hard capacity
//! - `context`: capabilities a host editor provides
//! - `navigator`: back/forward state machine
//!
//! # Example
//!
//! ```
//! use waypointer::history::{Navigator, PositionSource, Waypoint, WaypointNavigator};
//!
//! struct Host {
//!     at: Waypoint,
//!     moved_to: Option<Waypoint>,
//! }
//!
//! impl PositionSource for Host {
//!     fn current_position(&self) -> Option<Waypoint> {
//!         Some(self.at.clone())
//!     }
//! }
//!
//! impl Navigator for Host {
//!     fn move_to(&mut self, waypoint: Waypoint) {
//!         self.moved_to = Some(waypoint);
//!     }
//!     fn notify(&mut self, _message: &str) {}
//! }
//!
//! let mut nav = WaypointNavigator::new();
//! let mut host = Host { at: Waypoint::new("a.rs", 3), moved_to: None };
//! nav.save_current(&mut host).unwrap();
//!
//! host.at = Waypoint::new("b.rs", 7);
//! nav.back(&mut host).unwrap();
//! assert_eq!(host.moved_to, Some(Waypoint::new("a.rs", 3)));
//! assert_eq!(nav.forward_stack().peek(), Some(&Waypoint::new("b.rs", 7)));
//! ```

pub mod context;
pub mod error;
pub mod navigator;
pub mod stack;
pub mod waypoint;

pub use context::{EditorContext, Navigator, PositionSource};
pub use error::StackError;
pub use navigator::WaypointNavigator;
pub use stack::BoundedStack;
pub use waypoint::Waypoint;
