//! Job call graph builder
//!
//! Reads a job file, follows every directive it contains and repeats for
//! each referenced job, producing the ordered call tree rooted at one job.
//!
//! One visited set is shared by the whole traversal. The first occurrence of
//! a name is expanded; every later occurrence, whether a cycle back to an
//! ancestor or a second path to the same job from a sibling branch, becomes
//! an empty subtree. Each file is therefore read at most once per run.
//!
//! Missing or unreadable files never stop the traversal: they are recorded
//! as [`BuildDiagnostic`]s and the job stays in the tree as a leaf.
//!
//! A job exists only when its exact file name is listed in the folder. Case
//! variants that a case-insensitive file system would happily open count as
//! missing, so the tree agrees with the file names cleanup compares against.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::entities::{ChildMap, JobTree, VisitedSet};
use crate::domain::ports::{FileSystem, FsError};
use crate::domain::services::directive::references;
use crate::domain::value_objects::{JobFolder, JobName};

/// A non-fatal problem met while loading a job file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildDiagnostic {
    /// The job's file does not exist in the folder
    NotFound {
        job: JobName,
        file_name: String,
        folder: PathBuf,
    },
    /// The job's file exists but could not be read
    Unreadable {
        job: JobName,
        path: PathBuf,
        message: String,
    },
}

impl BuildDiagnostic {
    pub fn job(&self) -> &JobName {
        match self {
            BuildDiagnostic::NotFound { job, .. } | BuildDiagnostic::Unreadable { job, .. } => job,
        }
    }
}

impl fmt::Display for BuildDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildDiagnostic::NotFound {
                file_name, folder, ..
            } => write!(
                f,
                "File '{}' not found in folder: {}",
                file_name,
                folder.display()
            ),
            BuildDiagnostic::Unreadable { path, message, .. } => {
                write!(f, "Failed to open file '{}': {}", path.display(), message)
            }
        }
    }
}

/// State carried through one traversal
#[derive(Debug, Default)]
pub struct Traversal {
    visited: VisitedSet,
    diagnostics: Vec<BuildDiagnostic>,
    /// File names in the job folder; `None` skips the exact-name check
    listing: Option<BTreeSet<String>>,
}

impl Traversal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Traversal that treats only the listed file names as existing
    pub fn with_listing(listing: BTreeSet<String>) -> Self {
        Self {
            listing: Some(listing),
            ..Self::default()
        }
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn diagnostics(&self) -> &[BuildDiagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<BuildDiagnostic> {
        self.diagnostics
    }
}

/// Result of building a tree from a root job
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub tree: JobTree,
    /// Problems met while loading files, in traversal order
    pub diagnostics: Vec<BuildDiagnostic>,
}

/// Builds job call trees from the files of one job folder
pub struct GraphBuilder<FS: FileSystem> {
    fs: FS,
    folder: JobFolder,
}

impl<FS: FileSystem> GraphBuilder<FS> {
    pub fn new(fs: FS, folder: JobFolder) -> Self {
        Self { fs, folder }
    }

    pub fn folder(&self) -> &JobFolder {
        &self.folder
    }

    pub fn fs(&self) -> &FS {
        &self.fs
    }

    /// File names directly inside the job folder, or `None` when the folder
    /// cannot be listed.
    pub fn job_file_names(&self) -> Option<BTreeSet<String>> {
        let paths = self.fs.list_files(self.folder.path()).ok()?;
        Some(
            paths
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect(),
        )
    }

    /// Build the whole tree rooted at `root` with a fresh traversal
    pub fn build(&self, root: JobName) -> BuildOutcome {
        let mut traversal = match self.job_file_names() {
            Some(listing) => Traversal::with_listing(listing),
            None => Traversal::new(),
        };
        let children = self.build_tree(&root, &mut traversal);
        tracing::debug!(
            root = %root,
            jobs = traversal.visited().len(),
            missing = traversal.diagnostics().len(),
            "built job tree"
        );
        BuildOutcome {
            tree: JobTree::new(root, children),
            diagnostics: traversal.into_diagnostics(),
        }
    }

    /// References of `job`, each expanded recursively.
    ///
    /// Returns an empty map without touching the file system when `job` was
    /// already visited in this traversal.
    pub fn build_tree(&self, job: &JobName, traversal: &mut Traversal) -> ChildMap {
        if !traversal.visited.insert(job.clone()) {
            tracing::trace!(job = %job, "already visited");
            return ChildMap::new();
        }

        if !job.is_file_stem() {
            tracing::warn!(job = %job, "job name points outside the job folder");
            traversal.diagnostics.push(self.not_found(job));
            return ChildMap::new();
        }

        let unlisted = traversal
            .listing
            .as_ref()
            .is_some_and(|listing| !listing.contains(&job.file_name(self.folder.extension())));
        if unlisted {
            let diagnostic = self.not_found(job);
            tracing::warn!(job = %job, "{}", diagnostic);
            traversal.diagnostics.push(diagnostic);
            return ChildMap::new();
        }

        let path = self.folder.job_path(job);
        let content = match self.fs.read_bytes(&path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                let diagnostic = self.diagnose(job, &path, err);
                tracing::warn!(job = %job, "{}", diagnostic);
                traversal.diagnostics.push(diagnostic);
                return ChildMap::new();
            }
        };

        let mut children = ChildMap::new();
        for called in references(&content, self.folder.directive()) {
            tracing::trace!(caller = %job, called = %called, "job reference");
            let subtree = self.build_tree(&called, traversal);
            children.insert(called, subtree);
        }
        children
    }

    fn not_found(&self, job: &JobName) -> BuildDiagnostic {
        BuildDiagnostic::NotFound {
            job: job.clone(),
            file_name: job.file_name(self.folder.extension()),
            folder: self.folder.path().to_path_buf(),
        }
    }

    fn diagnose(&self, job: &JobName, path: &Path, err: FsError) -> BuildDiagnostic {
        if err.is_not_found() {
            self.not_found(job)
        } else {
            BuildDiagnostic::Unreadable {
                job: job.clone(),
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        }
    }
}
