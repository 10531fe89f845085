//! 扫描器错误类型
//!
//! 到达流末尾不是错误：`advance` 返回 `None`，分词循环返回 `Ok(None)`。

use thiserror::Error;

/// 扫描结果
pub type ScanResult<T> = Result<T, ScanError>;

/// 扫描器错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// 预读数量必须至少为 1
    #[error("peek requires at least 1 rune, got {requested}")]
    InvalidPeek { requested: usize },

    /// 输入字节不是合法的 UTF-8
    #[error("invalid UTF-8 sequence at byte offset {byte_offset}")]
    Decode { byte_offset: usize },

    /// 目标偏移为负
    #[error("cannot seek to negative offset {offset}")]
    NegativeSeek { offset: i64 },
}

impl ScanError {
    /// 错误类别名（用于结构化报告）
    pub fn kind(&self) -> &'static str {
        match self {
            ScanError::InvalidPeek { .. } => "InvalidPeek",
            ScanError::Decode { .. } => "Decode",
            ScanError::NegativeSeek { .. } => "NegativeSeek",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ScanError::InvalidPeek { requested: 0 }.to_string(),
            "peek requires at least 1 rune, got 0"
        );
        assert_eq!(
            ScanError::Decode { byte_offset: 3 }.to_string(),
            "invalid UTF-8 sequence at byte offset 3"
        );
        assert_eq!(
            ScanError::NegativeSeek { offset: -1000 }.to_string(),
            "cannot seek to negative offset -1000"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(ScanError::Decode { byte_offset: 0 }.kind(), "Decode");
        assert_eq!(ScanError::NegativeSeek { offset: -1 }.kind(), "NegativeSeek");
    }
}
