//! Drift Core - changelog scanning (pure logic, no IO)
//!
//! Contains the rune scanner that segments a changelog into whitespace,
//! comment and ident spans, and the revision type that carries a
//! changelog's raw bytes. File access goes through `drift-vfs`; the
//! scanner itself only operates on in-memory buffers.
//!
//! Configuration and loggers are passed explicitly, not via global state.

pub mod kit;
pub mod revision;

// Re-export common types
pub use kit::lexer::{
    Cursor, Lookahead, ScanError, ScanResult, Scanner, SourceBuffer, SourcePosition, Token,
    TokenKind,
};
pub use revision::{read_revision, Revision};

// Re-export config types from drift-config
pub use drift_config::{Phase, ScannerConfig, SeekStrategy};
