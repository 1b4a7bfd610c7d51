//! In-memory File System
//!
//! Used by tests and by callers that want to render without touching disk.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// FileSystem backed by a map of path -> content
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: BTreeSet<PathBuf>,
    unreadable: BTreeSet<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: seed a file
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.borrow_mut().insert(path.into(), content.into());
        self
    }

    /// Builder: an empty directory
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    /// Builder: a path that exists but fails to read with permission denied
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.files.borrow_mut().insert(path.clone(), String::new());
        self.unreadable.insert(path);
        self
    }

    /// Current content of a file, if any
    pub fn content(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        if self.unreadable.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        if self.unreadable.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    /// Directories are implied by the files below them, plus `with_dir` ones
    fn list_dirs(&self, path: &Path) -> FsResult<Vec<String>> {
        let files = self.files.borrow();
        let mut found = self.dirs.contains(path);
        let mut names = BTreeSet::new();

        for candidate in files.keys().chain(self.dirs.iter()) {
            let Ok(rest) = candidate.strip_prefix(path) else {
                continue;
            };
            let mut components = rest.components();
            let Some(first) = components.next() else {
                continue;
            };
            found = true;

            let is_dir = components.next().is_some() || self.dirs.contains(candidate);
            if let (true, Some(name)) = (is_dir, first.as_os_str().to_str()) {
                names.insert(name.to_string());
            }
        }

        if !found {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        Ok(names.into_iter().collect())
    }
}
