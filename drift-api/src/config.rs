//! API 层配置
//!
//! 包含扫描配置 RunConfig 和全局单例（供 CLI 使用）

use drift_config::{LogLevel, ScannerConfig};
use drift_log::{Level, Logger};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Scan configuration
#[derive(Clone)]
pub struct RunConfig {
    /// Scanner configuration
    pub scanner: ScannerConfig,
    /// Return whitespace and comment segments along with idents
    pub include_trivia: bool,
    /// Logger (noop by default)
    pub logger: Arc<Logger>,
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("scanner", &self.scanner)
            .field("include_trivia", &self.include_trivia)
            .finish()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            scanner: ScannerConfig::default(),
            include_trivia: false,
            logger: Logger::noop(),
        }
    }
}

/// Map a configured verbosity onto the logger's level
pub fn log_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::Trace,
        LogLevel::Debug => Level::Debug,
        LogLevel::Info => Level::Info,
        LogLevel::Warn => Level::Warn,
        LogLevel::Error => Level::Error,
        LogLevel::Silent => Level::Off,
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration
///
/// Returns the rejected config if one was already installed.
pub fn init(config: RunConfig) -> Result<(), RunConfig> {
    GLOBAL_CONFIG.set(config)
}

/// Get global config reference, if initialized
pub fn config() -> Option<&'static RunConfig> {
    GLOBAL_CONFIG.get()
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
