//! Changelog revisions
//!
//! A revision is the raw bytes of one changelog file plus the path it was
//! read from. Decoding happens when a scanner is built over it.

use crate::kit::lexer::{ScanResult, Scanner};
use drift_config::{Phase, ScannerConfig};
use drift_log::{debug, Logger};
use drift_vfs::{VfsResult, VirtualFileSystem};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One changelog file, loaded into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub path: PathBuf,
    pub data: Vec<u8>,
}

impl Revision {
    pub fn new(path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Build a scanner over this revision's bytes
    ///
    /// Fails with `ScanError::Decode` if the file is not valid UTF-8.
    pub fn scanner(&self, config: ScannerConfig, logger: Arc<Logger>) -> ScanResult<Scanner> {
        Scanner::with_config(&self.data, config, logger)
    }
}

/// Read a changelog through the given file system
pub fn read_revision(path: impl AsRef<Path>, fs: &dyn VirtualFileSystem) -> VfsResult<Revision> {
    read_revision_logged(path, fs, &Logger::noop())
}

/// Same as [`read_revision`], reporting the load on `logger`
pub fn read_revision_logged(
    path: impl AsRef<Path>,
    fs: &dyn VirtualFileSystem,
    logger: &Arc<Logger>,
) -> VfsResult<Revision> {
    let path = path.as_ref();
    let data = fs.read_file(path)?;
    debug!(
        logger,
        target: Phase::Read.target(),
        "Read {} bytes from {}",
        data.len(),
        path.display()
    );
    Ok(Revision::new(path, data))
}
