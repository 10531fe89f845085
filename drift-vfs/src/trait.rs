//! VirtualFileSystem trait definition

use crate::error::VfsResult;
use std::path::Path;

/// What `metadata` reports about a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMetadata {
    /// Size in bytes (0 for directories)
    pub len: u64,
    /// Whether the path is a directory
    pub is_dir: bool,
}

/// Virtual File System trait
///
/// Provides a unified, read-only interface for loading changelog files,
/// decoupling the scanner pipeline from the storage backend.
///
/// # Implementations
/// - `MemoryFileSystem`: In-memory file system (tests, embedding)
/// - `NativeFileSystem`: Native OS file system
pub trait VirtualFileSystem: Send + Sync {
    /// Read the whole file into memory
    ///
    /// # Errors
    /// `NotFound` if nothing exists at `path`, `IsDirectory` if `path`
    /// names a directory, `Io` for every other failure.
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>>;

    /// Size and kind of the entry at `path`
    fn metadata(&self, path: &Path) -> VfsResult<FileMetadata>;

    /// Check if path exists
    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }

    /// Check if path exists and is a file
    fn is_file(&self, path: &Path) -> bool {
        matches!(self.metadata(path), Ok(meta) if !meta.is_dir)
    }

    /// Check if path exists and is a directory
    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.metadata(path), Ok(meta) if meta.is_dir)
    }
}
