//! API 类型定义
//!
//! 扫描的输出类型。

use drift_core::Token;
use serde::Serialize;
use std::path::PathBuf;

/// 扫描输出
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanOutput {
    /// 变更日志路径（从内存扫描时为空）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// 产出的片段（默认只有 ident）
    pub tokens: Vec<Token>,
    /// 输入的码点数
    pub rune_count: usize,
    /// 输入的行数
    pub line_count: usize,
}

impl ScanOutput {
    /// ident 数量
    pub fn ident_count(&self) -> usize {
        self.tokens.iter().filter(|t| !t.kind.is_trivia()).count()
    }
}
