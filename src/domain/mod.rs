//! Domain Layer
//!
//! The core of jobprune: job names, the job call tree and the rules that
//! build and render it.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (JobName, JobFolder)
//! - `entities/` - The job call tree and its reachable set
//! - `services/` - Directive parsing, graph building, tree rendering
//! - `ports/` - Interface definitions for infrastructure
//!
//! All file access goes through the `FileSystem` port, so every service here
//! can be exercised against an in-memory double.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
