//! Error types for jobprune
//!
//! Only the conditions that stop a run live here. Per-file problems found
//! while building the tree or cleaning the folder are reported as data
//! (`BuildDiagnostic`, `CleanAction::Failed`) and never abort processing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for jobprune operations
pub type JobPruneResult<T> = Result<T, JobPruneError>;

/// Main error type for jobprune operations
#[derive(Error, Debug)]
pub enum JobPruneError {
    /// No root job name was supplied (empty or whitespace-only)
    #[error("No job name provided.")]
    EmptyJobName,

    /// The root job's file does not exist
    #[error("Starting job file not found: {}", path.display())]
    RootJobNotFound { path: PathBuf },

    /// The root job's file exists only under a different letter case
    #[error("Starting job '{given}' only matches '{file_name}' when case is ignored; job names are case-sensitive.")]
    RootJobCaseMismatch { given: String, file_name: String },

    /// The job folder does not exist
    #[error("Folder '{}' does not exist.", path.display())]
    JobFolderNotFound { path: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JobPruneError {
    /// True when the error guarantees that nothing was deleted.
    pub fn aborts_before_cleanup(&self) -> bool {
        matches!(
            self,
            JobPruneError::EmptyJobName
                | JobPruneError::RootJobNotFound { .. }
                | JobPruneError::RootJobCaseMismatch { .. }
        )
    }
}
