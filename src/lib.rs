//! Waypointer - bookmark file positions and walk back and forward through them.
//!
//! The core lives in [`history`]: a [`history::WaypointNavigator`] keeps a
//! backward and a forward stack of [`history::Waypoint`]s and talks to its host
//! editor through the [`history::PositionSource`] and [`history::Navigator`]
//! traits. [`commands`] names the operations for hosts to bind. The remaining
//! modules make up a small terminal viewer that hosts the navigator.

pub mod commands;
pub mod config;
pub mod editor;
pub mod file;
pub mod history;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;
