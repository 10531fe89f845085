//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use drift_config::Phase;
use serde::Serialize;
use thiserror::Error;

/// 扫描错误（结构化）
pub use drift_core::kit::lexer::ScanError;

/// 文件访问错误
pub use drift_vfs::VfsError;

/// Drift 错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriftError {
    /// 读取变更日志失败
    #[error("{0}")]
    Vfs(#[from] VfsError),

    /// 解码或扫描失败
    #[error("{0}")]
    Scan(#[from] ScanError),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),
}

impl DriftError {
    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            DriftError::Vfs(_) => Phase::Read.as_str(),
            DriftError::Scan(_) => Phase::Scan.as_str(),
            DriftError::Config(_) => "config",
        }
    }

    /// 解码错误的字节偏移（如果有）
    pub fn byte_offset(&self) -> Option<usize> {
        match self {
            DriftError::Scan(ScanError::Decode { byte_offset }) => Some(*byte_offset),
            _ => None,
        }
    }

    /// 转换为结构化错误报告
    ///
    /// CLI 可以直接打印，上层应用可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        let (kind, path) = match self {
            DriftError::Vfs(e) => (vfs_kind(e), Some(e.path().to_string())),
            DriftError::Scan(e) => (e.kind(), None),
            DriftError::Config(_) => ("ConfigError", None),
        };
        let message = match self {
            DriftError::Config(msg) => msg.clone(),
            other => other.to_string(),
        };
        ErrorReport {
            phase: self.phase(),
            kind,
            message,
            byte_offset: self.byte_offset(),
            path,
        }
    }
}

fn vfs_kind(e: &VfsError) -> &'static str {
    match e {
        VfsError::NotFound { .. } => "NotFound",
        VfsError::PermissionDenied { .. } => "PermissionDenied",
        VfsError::IsDirectory { .. } => "IsDirectory",
        VfsError::Io { .. } => "Io",
    }
}

/// 结构化错误报告
///
/// 上层应用（CLI、编辑器插件）可以根据自己的需求格式化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: read, scan, config
    pub phase: &'static str,
    /// 错误类型（可用于程序化处理）
    pub kind: &'static str,
    /// 人类可读的错误消息
    pub message: String,
    /// 非法 UTF-8 的字节偏移
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_offset: Option<usize>,
    /// 出错的文件路径
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl std::fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error[{}]: {}", self.phase, self.message)
    }
}

impl ErrorReport {
    /// 转换为 JSON 格式
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
