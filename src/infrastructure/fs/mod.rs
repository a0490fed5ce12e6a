//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod local;
#[cfg(test)]
mod memory;

pub use local::LocalFs;
#[cfg(test)]
pub(crate) use memory::MockFs;
