//! Native file system implementation

use crate::error::{display_path, VfsError, VfsResult};
use crate::r#trait::{FileMetadata, VirtualFileSystem};
use std::path::{Path, PathBuf};

/// A native OS file system implementation.
///
/// Wraps `std::fs`. With a base directory, relative paths are resolved
/// against it; absolute paths are used as given.
#[derive(Debug, Clone, Default)]
pub struct NativeFileSystem {
    base: Option<PathBuf>,
}

impl NativeFileSystem {
    /// Create a new native file system rooted at the process working directory.
    pub fn new() -> Self {
        Self { base: None }
    }

    /// Create a native file system that resolves relative paths against `base`.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl VirtualFileSystem for NativeFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        let resolved = self.resolve(path);
        if resolved.is_dir() {
            return Err(VfsError::IsDirectory {
                path: display_path(&resolved),
            });
        }
        std::fs::read(&resolved).map_err(|e| VfsError::from_io(&resolved, e))
    }

    fn metadata(&self, path: &Path) -> VfsResult<FileMetadata> {
        let resolved = self.resolve(path);
        let meta = std::fs::metadata(&resolved).map_err(|e| VfsError::from_io(&resolved, e))?;
        Ok(FileMetadata {
            len: if meta.is_dir() { 0 } else { meta.len() },
            is_dir: meta.is_dir(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("drift_vfs_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_native_read() {
        let fs = NativeFileSystem::new();
        let path = temp_path("read");
        std::fs::write(&path, "--+changeset id:1\n").unwrap();

        assert_eq!(fs.read_file(&path).unwrap(), b"--+changeset id:1\n");
        assert!(fs.exists(&path));
        assert!(fs.is_file(&path));
        assert_eq!(fs.metadata(&path).unwrap().len, 18);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_native_read_nonexistent() {
        let fs = NativeFileSystem::new();
        let path = temp_path("nonexistent");
        let _ = std::fs::remove_file(&path);

        let result = fs.read_file(&path);
        assert!(matches!(result.unwrap_err(), VfsError::NotFound { .. }));
        assert!(!fs.exists(&path));
    }

    #[test]
    fn test_native_directory() {
        let fs = NativeFileSystem::new();
        let dir = temp_path("dir");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir(&dir).unwrap();

        assert!(fs.is_dir(&dir));
        assert!(!fs.is_file(&dir));
        assert!(matches!(
            fs.read_file(&dir).unwrap_err(),
            VfsError::IsDirectory { .. }
        ));

        std::fs::remove_dir(&dir).unwrap();
    }

    #[test]
    fn test_native_with_base() {
        let dir = temp_path("base");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("changelog.sql"), "select 1;").unwrap();

        let fs = NativeFileSystem::with_base(&dir);
        assert_eq!(fs.read_file(Path::new("changelog.sql")).unwrap(), b"select 1;");
        // 绝对路径不受 base 影响
        assert!(fs.is_file(&dir.join("changelog.sql")));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
