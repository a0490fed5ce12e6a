//! JobName value object - identifies one job file in a job folder

use std::borrow::Borrow;
use std::fmt;

use crate::error::{JobPruneError, JobPruneResult};

/// Name of a job, the file stem of `<name>.<ext>` in the job folder.
///
/// The name is opaque: whatever text follows a directive is a job name,
/// including the empty string produced by a bare `CALL JOB:` line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct JobName(String);

impl JobName {
    /// Parse user input for the root job.
    ///
    /// Surrounding whitespace is dropped; an empty result is rejected.
    pub fn parse_root(input: &str) -> JobPruneResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(JobPruneError::EmptyJobName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// False for names that would leave the job folder (`../X`, `/etc/X`).
    pub fn is_file_stem(&self) -> bool {
        !self.0.contains(&['/', '\\'][..])
    }

    /// File name for this job with the given extension (no leading dot)
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension)
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for JobName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for JobName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JobName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for JobName {
    fn from(name: String) -> Self {
        Self(name)
    }
}
