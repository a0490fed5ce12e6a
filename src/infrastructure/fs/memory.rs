//! In-memory file system for tests
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared with the
//! code under test while the test keeps inspecting it.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
    locked: HashSet<PathBuf>,
    ignore_case: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MockFs {
    state: Arc<Mutex<State>>,
}

impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, content: &str) {
        self.add_bytes(path, content.as_bytes().to_vec());
    }

    pub fn add_bytes(&self, path: impl Into<PathBuf>, content: Vec<u8>) {
        let path = path.into();
        let mut state = self.state.lock().unwrap();
        if let Some(parent) = path.parent() {
            state.dirs.insert(parent.to_path_buf());
        }
        state.files.insert(path, content);
    }

    pub fn remove_file(&self, path: impl AsRef<Path>) {
        self.state.lock().unwrap().files.remove(path.as_ref());
    }

    /// Reads of `path` fail with permission denied
    pub fn deny_read(&self, path: impl Into<PathBuf>) {
        self.state.lock().unwrap().unreadable.insert(path.into());
    }

    /// Removal of `path` fails with permission denied
    pub fn lock(&self, path: impl Into<PathBuf>) {
        self.state.lock().unwrap().locked.insert(path.into());
    }

    /// File lookups ignore ASCII case, like NTFS and APFS
    pub fn ignore_case(&self) {
        self.state.lock().unwrap().ignore_case = true;
    }

    pub fn has_file(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().unwrap().files.contains_key(path.as_ref())
    }
}

impl FileSystem for MockFs {
    fn read_bytes(&self, path: &Path) -> FsResult<Vec<u8>> {
        let state = self.state.lock().unwrap();
        if state.unreadable.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        let found = if state.ignore_case {
            let wanted = path.to_string_lossy();
            state
                .files
                .iter()
                .find(|(p, _)| p.to_string_lossy().eq_ignore_ascii_case(&wanted))
                .map(|(_, content)| content)
        } else {
            state.files.get(path)
        };
        found
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let state = self.state.lock().unwrap();
        if !state.dirs.contains(dir) {
            return Err(FsError::NotFound(dir.to_path_buf()));
        }
        Ok(state
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.locked.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        state
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }
}
