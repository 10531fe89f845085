//! Drift Virtual File System
//!
//! Read-only file access abstraction with two backends. The scanner never
//! touches the disk itself: callers load a changelog's bytes through a
//! [`VirtualFileSystem`] and hand them over.
//!
//! # Usage
//! ```
//! use drift_vfs::{MemoryFileSystem, VirtualFileSystem};
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::with_files([("/db/changelog.sql", b"select 1;".to_vec())]);
//! let content = fs.read_file(Path::new("/db/changelog.sql")).unwrap();
//! assert_eq!(content, b"select 1;");
//! ```

mod error;
mod memory;
mod native;
mod r#trait;

pub use error::{VfsError, VfsResult};
pub use memory::MemoryFileSystem;
pub use native::NativeFileSystem;
pub use r#trait::{FileMetadata, VirtualFileSystem};
