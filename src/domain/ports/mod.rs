//! Domain Ports
//!
//! Interfaces the domain needs from the outside world.

pub mod file_system;

pub use file_system::{FileSystem, FsError, FsResult};
