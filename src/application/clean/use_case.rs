//! Clean Use Case
//!
//! Orchestrates the job folder cleanup.

use crate::domain::entities::ReachableSet;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::JobFolder;
use crate::error::{JobPruneError, JobPruneResult};

use super::options::CleanOptions;
use super::result::{CleanAction, CleanResult};

/// Clean use case - removes job files that are not in the keep-set
pub struct CleanUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> CleanUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new clean use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Classify every job file in `folder` and delete the unreferenced ones.
    ///
    /// Only files named `*.<ext>` are considered. A failed deletion is
    /// recorded and the remaining files are still processed. The only error
    /// returned is a missing folder, in which case nothing was touched.
    pub fn execute(
        &self,
        folder: &JobFolder,
        keep: &ReachableSet,
        options: &CleanOptions,
    ) -> JobPruneResult<CleanResult> {
        if !self.fs.is_dir(folder.path()) {
            return Err(JobPruneError::JobFolderNotFound {
                path: folder.path().to_path_buf(),
            });
        }

        let files = self.fs.list_files(folder.path()).map_err(|e| {
            JobPruneError::Io(std::io::Error::other(format!(
                "cannot list {}: {}",
                folder.path().display(),
                e
            )))
        })?;

        let mut result = CleanResult::new();

        for path in files {
            let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().into_owned())
            else {
                continue;
            };
            let Some(job) = folder.job_name_of(&file_name) else {
                continue;
            };

            let action = if keep.contains(&job) {
                CleanAction::Kept
            } else if options.dry_run {
                CleanAction::WouldDelete
            } else {
                match self.fs.remove(&path) {
                    Ok(()) => {
                        tracing::info!(file = %file_name, "deleted unreferenced job file");
                        CleanAction::Deleted
                    }
                    Err(e) => {
                        tracing::warn!(file = %file_name, error = %e, "could not delete job file");
                        CleanAction::Failed {
                            reason: e.to_string(),
                        }
                    }
                }
            };

            result.add(file_name, path, action);
        }

        Ok(result)
    }
}
