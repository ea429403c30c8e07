//! File I/O for the editor host.
//!
//! Files are only read; the viewer never writes back.

pub mod loader;
