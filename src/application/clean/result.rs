//! Clean result types

use std::path::PathBuf;

/// What happened to one job file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanAction {
    /// Referenced by the tree, left alone
    Kept,
    /// Unreferenced and removed
    Deleted,
    /// Unreferenced; a dry run left it in place
    WouldDelete,
    /// Unreferenced but removal failed
    Failed { reason: String },
}

impl std::fmt::Display for CleanAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CleanAction::Kept => write!(f, "kept"),
            CleanAction::Deleted => write!(f, "deleted"),
            CleanAction::WouldDelete => write!(f, "would delete"),
            CleanAction::Failed { reason } => write!(f, "failed: {}", reason),
        }
    }
}

/// Outcome for a single job file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// File name inside the job folder
    pub file_name: String,
    /// Full path to the file
    pub path: PathBuf,
    pub action: CleanAction,
}

/// Result of a cleanup pass, in folder listing order
#[derive(Debug, Clone, Default)]
pub struct CleanResult {
    pub outcomes: Vec<FileOutcome>,
}

impl CleanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, file_name: String, path: PathBuf, action: CleanAction) {
        self.outcomes.push(FileOutcome {
            file_name,
            path,
            action,
        });
    }

    fn count(&self, pred: impl Fn(&CleanAction) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.action)).count()
    }

    pub fn kept_count(&self) -> usize {
        self.count(|a| matches!(a, CleanAction::Kept))
    }

    /// Files removed, or that would be removed in a dry run
    pub fn deleted_count(&self) -> usize {
        self.count(|a| matches!(a, CleanAction::Deleted | CleanAction::WouldDelete))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|a| matches!(a, CleanAction::Failed { .. }))
    }

    /// Names of the files with the given outcome
    pub fn file_names(&self, action: &CleanAction) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| &o.action == action)
            .map(|o| o.file_name.as_str())
            .collect()
    }

    /// Get total count of files considered
    pub fn total_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Check if every deletion succeeded
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}
