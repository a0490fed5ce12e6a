//! Clean Use Case
//!
//! Removes job files that the root job never reaches.
//!
//! This module handles:
//! - Listing the job files of the folder
//! - Classifying each as kept or unreferenced
//! - Deleting unreferenced files, recording per-file failures

mod options;
mod result;
mod use_case;

pub use options::CleanOptions;
pub use result::{CleanAction, CleanResult, FileOutcome};
pub use use_case::CleanUseCase;
