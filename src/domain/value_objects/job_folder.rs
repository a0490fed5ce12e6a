//! JobFolder value object - where job files live and how they are named

use std::path::{Path, PathBuf};

use super::JobName;

/// A folder of job files sharing one extension and one reference directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFolder {
    path: PathBuf,
    extension: String,
    directive: String,
}

impl JobFolder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            extension: "JBI".to_string(),
            directive: crate::domain::services::DEFAULT_DIRECTIVE.to_string(),
        }
    }

    /// Set the job file extension; a leading dot is ignored
    pub fn with_extension(mut self, extension: impl AsRef<str>) -> Self {
        self.extension = extension.as_ref().trim_start_matches('.').to_string();
        self
    }

    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directive = directive.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn directive(&self) -> &str {
        &self.directive
    }

    /// Path of the file backing `job`
    pub fn job_path(&self, job: &JobName) -> PathBuf {
        self.path.join(job.file_name(&self.extension))
    }

    /// Job name for a file name, or `None` if the file is not a job file.
    ///
    /// Matching is case-sensitive: `A.jbi` is not a job file when the
    /// extension is `JBI`.
    pub fn job_name_of(&self, file_name: &str) -> Option<JobName> {
        file_name
            .strip_suffix(self.extension.as_str())
            .and_then(|stem| stem.strip_suffix('.'))
            .map(JobName::from)
    }
}
