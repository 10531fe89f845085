//! VFS Error Types

use std::io;
use std::path::Path;
use thiserror::Error;

/// Result type for VFS operations
pub type VfsResult<T> = Result<T, VfsError>;

/// Error type for VFS operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    /// File or directory not found
    #[error("{path}: no such file or directory")]
    NotFound { path: String },

    /// Permission denied
    #[error("{path}: permission denied")]
    PermissionDenied { path: String },

    /// A file was expected but the path names a directory
    #[error("{path}: is a directory")]
    IsDirectory { path: String },

    /// Any other IO failure
    #[error("{path}: {message}")]
    Io { path: String, message: String },
}

impl VfsError {
    /// Classify an `io::Error` raised while accessing `path`
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = display_path(path);
        match err.kind() {
            io::ErrorKind::NotFound => VfsError::NotFound { path },
            io::ErrorKind::PermissionDenied => VfsError::PermissionDenied { path },
            _ => VfsError::Io {
                path,
                message: err.to_string(),
            },
        }
    }

    /// The path the failed operation was about
    pub fn path(&self) -> &str {
        match self {
            VfsError::NotFound { path }
            | VfsError::PermissionDenied { path }
            | VfsError::IsDirectory { path }
            | VfsError::Io { path, .. } => path,
        }
    }
}

/// Forward-slash form of a path, used in messages and as memory-fs keys
pub(crate) fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_classifies_kind() {
        let path = Path::new("/tmp/changelog.sql");

        let err = VfsError::from_io(path, io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(matches!(err, VfsError::NotFound { .. }));

        let err = VfsError::from_io(path, io::Error::new(io::ErrorKind::PermissionDenied, "no"));
        assert!(matches!(err, VfsError::PermissionDenied { .. }));

        let err = VfsError::from_io(path, io::Error::new(io::ErrorKind::Other, "disk on fire"));
        assert_eq!(
            err,
            VfsError::Io {
                path: "/tmp/changelog.sql".to_string(),
                message: "disk on fire".to_string(),
            }
        );
    }

    #[test]
    fn test_display() {
        let err = VfsError::NotFound {
            path: "/tmp/file".to_string(),
        };
        assert_eq!(err.to_string(), "/tmp/file: no such file or directory");
        assert_eq!(err.path(), "/tmp/file");
    }
}
