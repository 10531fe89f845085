//! Drift Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Drift crates.

use serde::Deserialize;

/// How the scanner recovers the line number after repositioning
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeekStrategy {
    /// Binary search over newline offsets collected once at construction
    #[default]
    #[serde(alias = "index")]
    LineIndex,
    /// Re-read the buffer from the start up to the target offset
    Replay,
}

impl SeekStrategy {
    /// Parse a strategy name as used on the command line
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "index" | "line_index" | "line-index" => Some(SeekStrategy::LineIndex),
            "replay" => Some(SeekStrategy::Replay),
            _ => None,
        }
    }
}

/// Configuration for the rune scanner
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Line recovery strategy used by `seek`
    pub seek_strategy: SeekStrategy,
}

/// Log verbosity as written in config files and CLI flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    /// Nothing is emitted
    Silent,
}

impl LogLevel {
    /// Parse log level string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "off" => Some(LogLevel::Silent),
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Pipeline phase, used to label errors and log records
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Loading the changelog bytes
    Read,
    /// Decoding and tokenizing
    Scan,
}

impl Phase {
    /// Get the string name of the phase
    pub const fn as_str(&self) -> &'static str {
        match self {
            Phase::Read => "read",
            Phase::Scan => "scan",
        }
    }

    /// Log target for records emitted during this phase
    pub const fn target(&self) -> &'static str {
        match self {
            Phase::Read => "drift::read",
            Phase::Scan => "drift::scan",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scanner_config() {
        let cfg = ScannerConfig::default();
        assert_eq!(cfg.seek_strategy, SeekStrategy::LineIndex);
    }

    #[test]
    fn test_seek_strategy_parse() {
        assert_eq!(SeekStrategy::parse("replay"), Some(SeekStrategy::Replay));
        assert_eq!(SeekStrategy::parse("INDEX"), Some(SeekStrategy::LineIndex));
        assert_eq!(SeekStrategy::parse("rewind"), None);
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("silent"), Some(LogLevel::Silent));
        assert_eq!(LogLevel::parse("Debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("verbose"), None);
        assert!(LogLevel::Trace < LogLevel::Silent);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Scan.as_str(), "scan");
        assert_eq!(Phase::Read.target(), "drift::read");
        assert_eq!(Phase::Scan.target(), "drift::scan");
    }

    #[test]
    fn test_deserialize_scanner_config() {
        let cfg: ScannerConfig = serde_json::from_str(r#"{ "seek_strategy": "replay" }"#).unwrap();
        assert_eq!(cfg.seek_strategy, SeekStrategy::Replay);

        let cfg: ScannerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.seek_strategy, SeekStrategy::LineIndex);

        let cfg: ScannerConfig = serde_json::from_str(r#"{ "seek_strategy": "index" }"#).unwrap();
        assert_eq!(cfg.seek_strategy, SeekStrategy::LineIndex);
    }
}
