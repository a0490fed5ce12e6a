//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod job_folder;
mod job_name;

pub use job_folder::JobFolder;
pub use job_name::JobName;
