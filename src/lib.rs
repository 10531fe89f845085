//! Drift - SQL migration changelog scanner
//!
//! Drift segments a migration changelog into whitespace, comment and
//! "ident" spans, each stamped with its code-point offset and line.
//! Downstream tooling assembles changesets from the ident stream.
//!
//! # Architecture
//!
//! ```text
//! drift-config  - configuration data (no logic)
//! drift-log     - explicit, capturable logging
//! drift-vfs     - file access (native / in-memory)
//! drift-core    - rune scanner and revisions (no IO)
//! drift-api     - orchestration, RunConfig, DriftError
//! drift-cli     - the `drift` binary
//! ```
//!
//! # Quick Start
//!
//! ```
//! use drift::{scan_source, RunConfig};
//!
//! let output = scan_source(b"--+changeset a:1\nSELECT 1;", &RunConfig::default()).unwrap();
//! let texts: Vec<&str> = output.tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["SELECT", "1;"]);
//! ```

pub use drift_api::{
    get_config, init_config, is_initialized, log_level, scan, scan_file, scan_path, scan_source,
    DriftError, ErrorReport, LogLevel, Phase, Revision, RunConfig, ScanError, ScanOutput,
    ScannerConfig, SeekStrategy, SourcePosition, Token, TokenKind, VfsError,
};
pub use drift_vfs::{MemoryFileSystem, NativeFileSystem, VirtualFileSystem};

/// 快速扫描（使用默认配置）
///
/// # Example
/// ```
/// let idents = drift::quick_scan("a b -- c").unwrap();
/// assert_eq!(idents, ["a", "b"]);
/// ```
pub fn quick_scan(source: &str) -> Result<Vec<String>, DriftError> {
    let output = scan_source(source.as_bytes(), &RunConfig::default())?;
    Ok(output.tokens.into_iter().map(|t| t.text).collect())
}
