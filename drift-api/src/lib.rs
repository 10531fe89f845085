//! Drift API - Scan orchestration layer
//!
//! Provides unified scanning interface, including:
//! - Loading changelogs through a virtual file system
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (DriftError)
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `scan_source(source, &config)` API.

use drift_core::revision::read_revision_logged;
use drift_core::Scanner;
use drift_log::info;
use drift_vfs::VirtualFileSystem;
use std::path::{Path, PathBuf};

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, log_level, RunConfig};

// Re-export config types from drift_config
pub use drift_config::{LogLevel, Phase, ScannerConfig, SeekStrategy};

// Re-export error and types
pub mod error;
pub mod types;
pub use error::{DriftError, ErrorReport, ScanError, VfsError};
pub use types::ScanOutput;

// Re-export core types
pub use drift_config;
pub use drift_core::{Revision, SourcePosition, Token, TokenKind};

/// Scan an in-memory changelog with explicit configuration
///
/// This is the recommended API for library users.
pub fn scan_source(source: &[u8], config: &RunConfig) -> Result<ScanOutput, DriftError> {
    info!(config.logger, "Starting scan of {} bytes", source.len());
    let scanner = Scanner::with_config(source, config.scanner, config.logger.clone())?;
    let output = collect(scanner, None, config)?;
    info!(
        config.logger,
        "Scan completed: {} tokens",
        output.tokens.len()
    );
    Ok(output)
}

/// Read a changelog through `fs` and scan it
///
/// Every produced token is reported at debug level on the config's logger.
pub fn scan_file(
    path: impl AsRef<Path>,
    fs: &dyn VirtualFileSystem,
    config: &RunConfig,
) -> Result<ScanOutput, DriftError> {
    let path = path.as_ref();
    info!(config.logger, "Starting scan of {}", path.display());

    let revision = read_revision_logged(path, fs, &config.logger)?;
    let scanner = revision.scanner(config.scanner, config.logger.clone())?;
    let output = collect(scanner, Some(revision.path.clone()), config)?;

    info!(
        config.logger,
        "Scan completed: {} tokens from {}",
        output.tokens.len(),
        path.display()
    );
    Ok(output)
}

fn collect(
    mut scanner: Scanner,
    path: Option<PathBuf>,
    config: &RunConfig,
) -> Result<ScanOutput, DriftError> {
    let tokens: Vec<Token> = if config.include_trivia {
        scanner.segments().collect()
    } else {
        scanner.tokens().collect::<Result<_, _>>()?
    };

    let source = scanner.cursor().source();
    Ok(ScanOutput {
        path,
        tokens,
        rune_count: source.len(),
        line_count: source.newline_count() + 1,
    })
}

// ==================== Global config API ====================

fn global_config() -> Result<&'static RunConfig, DriftError> {
    get_config().ok_or_else(|| DriftError::Config("global config not initialized".to_string()))
}

/// Scan source bytes (uses global config)
pub fn scan(source: &[u8]) -> Result<ScanOutput, DriftError> {
    scan_source(source, global_config()?)
}

/// Scan a changelog file (uses global config)
pub fn scan_path(
    path: impl AsRef<Path>,
    fs: &dyn VirtualFileSystem,
) -> Result<ScanOutput, DriftError> {
    scan_file(path, fs, global_config()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_log::{Level, LogRingBuffer, Logger};
    use drift_vfs::MemoryFileSystem;

    const CHANGELOG: &str = "--+changeset drift:1\nCREATE TABLE t (id INT);\n/* done */\n";

    fn texts(output: &ScanOutput) -> Vec<&str> {
        output.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_scan_source_idents() {
        let output = scan_source(CHANGELOG.as_bytes(), &RunConfig::default()).unwrap();
        assert_eq!(texts(&output), vec!["CREATE", "TABLE", "t", "(id", "INT);"]);
        assert_eq!(output.line_count, 4);
        assert_eq!(output.rune_count, CHANGELOG.chars().count());
        assert_eq!(output.path, None);
    }

    #[test]
    fn test_scan_source_with_trivia() {
        let config = RunConfig {
            include_trivia: true,
            ..RunConfig::default()
        };
        let output = scan_source(CHANGELOG.as_bytes(), &config).unwrap();
        let joined: String = output.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, CHANGELOG);
        assert_eq!(output.ident_count(), 5);
        assert_eq!(output.tokens[0].kind, TokenKind::Comment);
    }

    #[test]
    fn test_scan_source_decode_error() {
        let err = scan_source(&[b'a', 0xFF], &RunConfig::default()).unwrap_err();
        assert_eq!(err, DriftError::Scan(ScanError::Decode { byte_offset: 1 }));
        assert_eq!(err.phase(), "scan");
    }

    #[test]
    fn test_scan_file() {
        let fs = MemoryFileSystem::with_files([("db/changelog.sql", CHANGELOG.as_bytes().to_vec())]);
        let output = scan_file("db/changelog.sql", &fs, &RunConfig::default()).unwrap();
        assert_eq!(output.path, Some(PathBuf::from("db/changelog.sql")));
        assert_eq!(output.tokens.len(), 5);
    }

    #[test]
    fn test_scan_missing_file() {
        let fs = MemoryFileSystem::new();
        let err = scan_file("nope.sql", &fs, &RunConfig::default()).unwrap_err();
        assert!(matches!(err, DriftError::Vfs(VfsError::NotFound { .. })));
        assert_eq!(err.phase(), "read");
    }

    #[test]
    fn test_scan_file_logs_tokens() {
        let ring = LogRingBuffer::new(128);
        let config = RunConfig {
            logger: Logger::new(Level::Debug).with_sink(ring.clone()),
            ..RunConfig::default()
        };
        let fs = MemoryFileSystem::with_files([("c.sql", b"a b".to_vec())]);
        scan_file("c.sql", &fs, &config).unwrap();

        let records = ring.dump_records();
        let messages: Vec<&str> = records.iter().map(|r| r.message.as_str()).collect();
        assert!(messages.contains(&"Starting scan of c.sql"));
        assert!(messages.contains(&"Token 1:0 IDENT \"a\""));
        assert!(messages.contains(&"Token 1:2 IDENT \"b\""));
        assert!(messages.contains(&"Scan completed: 2 tokens from c.sql"));
    }
}
