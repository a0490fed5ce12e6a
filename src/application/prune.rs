//! Prune Use Case
//!
//! Turns a user-supplied root job name into a call tree and the keep-set
//! used by cleanup.
//!
//! The root job is validated before anything else: an empty name or a
//! missing root file stops the run here, which guarantees that cleanup never
//! runs against a tree that could not have been built.

use crate::domain::entities::{JobTree, ReachableSet};
use crate::domain::ports::FileSystem;
use crate::domain::services::{BuildDiagnostic, GraphBuilder};
use crate::domain::value_objects::{JobFolder, JobName};
use crate::error::{JobPruneError, JobPruneResult};

/// Everything learned about the root job's call graph
#[derive(Debug, Clone)]
pub struct JobAnalysis {
    pub tree: JobTree,
    /// Missing or unreadable job files met while building the tree
    pub diagnostics: Vec<BuildDiagnostic>,
    /// Root plus every job appearing in the tree
    pub reachable: ReachableSet,
}

impl JobAnalysis {
    pub fn root(&self) -> &JobName {
        self.tree.root()
    }
}

/// Prune use case - validates the root job and analyses its call graph
pub struct PruneUseCase<FS>
where
    FS: FileSystem,
{
    builder: GraphBuilder<FS>,
}

impl<FS> PruneUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS, folder: JobFolder) -> Self {
        Self {
            builder: GraphBuilder::new(fs, folder),
        }
    }

    pub fn folder(&self) -> &JobFolder {
        self.builder.folder()
    }

    /// Check that `input` names an existing root job.
    ///
    /// The root's file name must be listed in the folder exactly as typed.
    /// A file matching only when case is ignored is refused: cleanup compares
    /// names exactly and would otherwise delete the root itself.
    pub fn resolve_root(&self, input: &str) -> JobPruneResult<JobName> {
        let root = JobName::parse_root(input)?;
        let path = self.folder().job_path(&root);
        if !root.is_file_stem() {
            return Err(JobPruneError::RootJobNotFound { path });
        }

        let file_name = root.file_name(self.folder().extension());
        let listing = self.builder.job_file_names().unwrap_or_default();
        if listing.contains(&file_name) {
            return Ok(root);
        }

        match listing
            .into_iter()
            .find(|listed| listed.eq_ignore_ascii_case(&file_name))
        {
            Some(listed) => Err(JobPruneError::RootJobCaseMismatch {
                given: root.to_string(),
                file_name: listed,
            }),
            None => Err(JobPruneError::RootJobNotFound { path }),
        }
    }

    /// Build the tree for an already resolved root job.
    pub fn analyze(&self, root: JobName) -> JobAnalysis {
        let outcome = self.builder.build(root);
        let reachable = outcome.tree.reachable();
        JobAnalysis {
            tree: outcome.tree,
            diagnostics: outcome.diagnostics,
            reachable,
        }
    }
}
