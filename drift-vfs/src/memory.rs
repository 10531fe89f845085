//! In-memory file system implementation

use crate::error::{display_path, VfsError, VfsResult};
use crate::r#trait::{FileMetadata, VirtualFileSystem};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// An in-memory file system implementation.
///
/// Files live in a shared `BTreeMap` keyed by forward-slash paths.
/// Directories are implicit: a path is a directory when some stored file
/// lies beneath it. Clones share the same storage.
///
/// # Example
/// ```
/// use drift_vfs::{MemoryFileSystem, VirtualFileSystem};
/// use std::path::Path;
///
/// let fs = MemoryFileSystem::new();
/// fs.insert("/migrations/001.sql", "create table t;");
/// assert!(fs.is_dir(Path::new("/migrations")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryFileSystem {
    /// Create a new empty memory file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new memory file system pre-populated with files.
    pub fn with_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<u8>)>,
        S: AsRef<str>,
    {
        let fs = Self::new();
        for (path, content) in files {
            fs.insert(path.as_ref(), content);
        }
        fs
    }

    /// Store (or replace) a file.
    pub fn insert(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let key = display_path(path.as_ref());
        if let Ok(mut files) = self.files.write() {
            files.insert(key, content.into());
        }
    }

    /// Remove a file, returning its content if it was present.
    pub fn remove(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        let key = display_path(path.as_ref());
        self.files.write().ok()?.remove(&key)
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.files.read().map(|files| files.len()).unwrap_or(0)
    }

    /// Whether no files are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn has_children(files: &BTreeMap<String, Vec<u8>>, key: &str) -> bool {
        let prefix = if key.ends_with('/') {
            key.to_string()
        } else {
            format!("{}/", key)
        };
        files
            .range(prefix.clone()..)
            .next()
            .is_some_and(|(k, _)| k.starts_with(&prefix))
    }
}

impl VirtualFileSystem for MemoryFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        let key = display_path(path);
        let files = self.files.read().map_err(|_| VfsError::Io {
            path: key.clone(),
            message: String::from("lock poisoned"),
        })?;

        if let Some(content) = files.get(&key) {
            return Ok(content.clone());
        }
        if Self::has_children(&files, &key) {
            return Err(VfsError::IsDirectory { path: key });
        }
        Err(VfsError::NotFound { path: key })
    }

    fn metadata(&self, path: &Path) -> VfsResult<FileMetadata> {
        let key = display_path(path);
        let files = self.files.read().map_err(|_| VfsError::Io {
            path: key.clone(),
            message: String::from("lock poisoned"),
        })?;

        if let Some(content) = files.get(&key) {
            return Ok(FileMetadata {
                len: content.len() as u64,
                is_dir: false,
            });
        }
        if Self::has_children(&files, &key) {
            return Ok(FileMetadata {
                len: 0,
                is_dir: true,
            });
        }
        Err(VfsError::NotFound { path: key })
    }
}
