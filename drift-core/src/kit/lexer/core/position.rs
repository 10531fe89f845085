//! 源代码位置追踪

use serde::Serialize;
use std::fmt;

/// 游标位置
///
/// - offset: 已消费的码点数，0-based（不是字节）
/// - line: 行号，1-based，等于已消费换行数加一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SourcePosition {
    pub offset: usize,
    pub line: usize,
}

impl SourcePosition {
    /// 创建新位置
    pub fn new(offset: usize, line: usize) -> Self {
        Self { offset, line }
    }

    /// 文件起始位置
    pub fn start() -> Self {
        Self { offset: 0, line: 1 }
    }

    /// 前进一个码点
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
        }
        self.offset += 1;
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.offset)
    }
}
